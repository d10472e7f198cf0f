//! Gate errors.

use super::error_code::{self, EvidentErrorCode};

/// Errors raised around gate evaluation. Gate *violations* are not errors;
/// they are recorded in gate results.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("{failures} gate(s) failed")]
    Failed { failures: usize },

    #[error("Failed to write gate report: {0}")]
    Report(String),
}

impl EvidentErrorCode for GateError {
    fn error_code(&self) -> &'static str {
        error_code::GATE_FAILED
    }
}
