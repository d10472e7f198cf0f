//! Scoring thresholds and traceability window.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Classification thresholds.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// Minimum confidence for `covered`. Default: 60.
    pub covered_threshold: Option<u32>,
    /// Minimum confidence for `partial`. Default: 30.
    pub partial_threshold: Option<u32>,
}

impl ScoringConfig {
    pub fn effective_covered_threshold(&self) -> u32 {
        self.covered_threshold
            .unwrap_or(constants::DEFAULT_COVERED_THRESHOLD)
    }

    pub fn effective_partial_threshold(&self) -> u32 {
        self.partial_threshold
            .unwrap_or(constants::DEFAULT_PARTIAL_THRESHOLD)
    }
}

/// Window used by the id-traceability signal.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TraceConfig {
    /// Lines after the ID searched for an exported declaration. Default: 5.
    pub lookahead: Option<usize>,
    /// Lines before the ID searched for an exported declaration. Default: 2.
    pub lookbehind: Option<usize>,
    /// Keywords that open an exported declaration.
    pub export_keywords: Option<Vec<String>>,
}

impl TraceConfig {
    pub fn effective_lookahead(&self) -> usize {
        self.lookahead.unwrap_or(constants::DEFAULT_TRACE_LOOKAHEAD)
    }

    pub fn effective_lookbehind(&self) -> usize {
        self.lookbehind.unwrap_or(constants::DEFAULT_TRACE_LOOKBEHIND)
    }

    pub fn effective_export_keywords(&self) -> Vec<String> {
        self.export_keywords.clone().unwrap_or_else(|| {
            constants::DEFAULT_EXPORT_KEYWORDS
                .iter()
                .map(|s| s.to_string())
                .collect()
        })
    }
}
