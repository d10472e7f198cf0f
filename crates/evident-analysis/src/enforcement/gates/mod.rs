//! Gates: six fixed policy checks over the ledger and registry.

pub mod confidence_baseline;
pub mod critical_coverage;
pub mod global_gate_references;
pub mod heavy_weight_coverage;
pub mod non_empty_sections;
pub mod runner;
pub mod types;
pub mod unique_ids;

pub use confidence_baseline::ConfidenceBaselineGate;
pub use critical_coverage::CriticalCoverageGate;
pub use global_gate_references::GlobalGateReferencesGate;
pub use heavy_weight_coverage::HeavyWeightCoverageGate;
pub use non_empty_sections::NonEmptySectionsGate;
pub use runner::{GateReport, GateRunner};
pub use types::*;
pub use unique_ids::UniqueIdsGate;
