//! Gate configuration.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;

/// Gate identifiers accepted in `strict`.
pub const KNOWN_GATE_IDS: &[&str] = &["G1", "G2", "G3", "G4", "G5", "G6"];

/// Configuration for the gate runner.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GateConfig {
    /// Minimum mean confidence for G3. Default: 25.
    pub confidence_baseline: Option<f64>,
    /// Weight at which G2 forbids `missing`. Default: 4.
    pub heavy_weight: Option<u32>,
    /// Warn-class gates promoted to fail-class (e.g. `["G1", "G2"]`).
    #[serde(default)]
    pub strict: Vec<String>,
}

impl GateConfig {
    pub fn effective_confidence_baseline(&self) -> f64 {
        self.confidence_baseline
            .unwrap_or(constants::DEFAULT_CONFIDENCE_BASELINE)
    }

    pub fn effective_heavy_weight(&self) -> u32 {
        self.heavy_weight.unwrap_or(constants::DEFAULT_HEAVY_WEIGHT)
    }

    /// Whether `gate_id` has been promoted to fail-class.
    pub fn is_strict(&self, gate_id: &str) -> bool {
        self.strict.iter().any(|g| g.eq_ignore_ascii_case(gate_id))
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for id in &self.strict {
            if !KNOWN_GATE_IDS.iter().any(|k| k.eq_ignore_ascii_case(id)) {
                return Err(ConfigError::InvalidValue {
                    field: "gates.strict".to_string(),
                    message: format!("unknown gate id '{id}'"),
                });
            }
        }
        Ok(())
    }
}
