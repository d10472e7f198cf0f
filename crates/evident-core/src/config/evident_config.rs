//! Root configuration document.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{GateConfig, ScanConfig, ScoringConfig, TraceConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level `evident.toml` structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EvidentConfig {
    pub scan: ScanConfig,
    pub scoring: ScoringConfig,
    pub trace: TraceConfig,
    pub gates: GateConfig,
    pub output: OutputConfig,
}

/// Input/output document locations.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Registry document to parse.
    pub registry: Option<PathBuf>,
    /// Where the ledger is written.
    pub ledger: Option<PathBuf>,
}

impl OutputConfig {
    pub fn effective_registry(&self) -> PathBuf {
        self.registry
            .clone()
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_REGISTRY_PATH))
    }

    pub fn effective_ledger(&self) -> PathBuf {
        self.ledger
            .clone()
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_LEDGER_PATH))
    }
}

impl EvidentConfig {
    /// Parse a config document from TOML text.
    pub fn from_toml_str(text: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::ParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file. A missing file is an error here; use
    /// [`EvidentConfig::load_or_default`] for the optional case.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        Self::from_toml_str(&text, &path.display().to_string())
    }

    /// Load `path` if it exists, otherwise return defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.is_file() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Reject settings that cannot produce a coherent classification.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let covered = self.scoring.effective_covered_threshold();
        let partial = self.scoring.effective_partial_threshold();
        if covered > constants::MAX_CONFIDENCE {
            return Err(ConfigError::InvalidValue {
                field: "scoring.covered_threshold".to_string(),
                message: format!("{covered} exceeds {}", constants::MAX_CONFIDENCE),
            });
        }
        if partial > covered {
            return Err(ConfigError::InvalidValue {
                field: "scoring.partial_threshold".to_string(),
                message: format!("{partial} is above covered threshold {covered}"),
            });
        }
        if self.scan.effective_extensions().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "scan.extensions".to_string(),
                message: "extension allow-list is empty".to_string(),
            });
        }
        self.gates.validate()
    }
}
