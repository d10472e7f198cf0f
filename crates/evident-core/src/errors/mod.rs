//! Error types for every Evident subsystem.
//!
//! Each subsystem owns a `thiserror` enum; `PipelineError` folds them
//! together for the binary. Every enum implements [`EvidentErrorCode`].

pub mod config_error;
pub mod error_code;
pub mod gate_error;
pub mod ledger_error;
pub mod pipeline_error;
pub mod registry_error;
pub mod scan_error;

pub use config_error::ConfigError;
pub use error_code::EvidentErrorCode;
pub use gate_error::GateError;
pub use ledger_error::LedgerError;
pub use pipeline_error::PipelineError;
pub use registry_error::RegistryError;
pub use scan_error::ScanError;
