//! evident-core: shared foundation for the Evident scanner.
//!
//! - `errors`: per-subsystem error enums with stable error codes
//! - `config`: `evident.toml` loading with effective defaults
//! - `tracing`: `EVIDENT_LOG`-driven subscriber setup
//! - `constants`: default thresholds, signal weights, and scan settings
//! - `types`: collection re-exports

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::EvidentConfig;
pub use errors::{EvidentErrorCode, PipelineError};
