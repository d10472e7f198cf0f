//! EvidentErrorCode trait for structured error reporting.

/// Stable, machine-readable error codes.
///
/// Every error enum implements this so the CLI and CI logs can key on a
/// code rather than on message text.
pub trait EvidentErrorCode {
    /// Returns the error code string (e.g., "REGISTRY_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const REGISTRY_ERROR: &str = "REGISTRY_ERROR";
pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const LEDGER_ERROR: &str = "LEDGER_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const GATE_FAILED: &str = "GATE_FAILED";
