//! Configuration for the Evident scanner.
//!
//! Loaded from `evident.toml` when present. Every field is optional and
//! exposes an `effective_*` accessor that falls back to the defaults in
//! [`crate::constants`].

pub mod evident_config;
pub mod gate_config;
pub mod scan_config;
pub mod scoring_config;

pub use evident_config::{EvidentConfig, OutputConfig};
pub use gate_config::GateConfig;
pub use scan_config::ScanConfig;
pub use scoring_config::{ScoringConfig, TraceConfig};
