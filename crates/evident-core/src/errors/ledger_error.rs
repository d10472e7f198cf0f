//! Ledger persistence errors.

use std::path::PathBuf;

use super::error_code::{self, EvidentErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Failed to serialize ledger: {0}")]
    Serialize(String),

    #[error("Failed to write ledger to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl EvidentErrorCode for LedgerError {
    fn error_code(&self) -> &'static str {
        error_code::LEDGER_ERROR
    }
}
