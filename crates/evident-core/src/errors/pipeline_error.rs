//! Top-level error for a full scan run.

use super::error_code::EvidentErrorCode;
use super::{ConfigError, GateError, LedgerError, RegistryError, ScanError};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Gate(#[from] GateError),
}

impl EvidentErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Registry(e) => e.error_code(),
            Self::Scan(e) => e.error_code(),
            Self::Ledger(e) => e.error_code(),
            Self::Gate(e) => e.error_code(),
        }
    }
}
