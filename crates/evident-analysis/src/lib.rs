//! evident-analysis: the scanning-and-scoring engine.
//!
//! - `naming`: identifier spelling variants
//! - `scanner`: corpus discovery and cached file contents
//! - `registry`: tolerant extraction of sections and requirements
//! - `evidence`: seven heuristic signals and confidence scoring
//! - `ledger`: aggregation, summary statistics, persistence
//! - `enforcement`: gates and reporters

pub mod enforcement;
pub mod evidence;
pub mod ledger;
pub mod naming;
pub mod registry;
pub mod scanner;

pub use evidence::{EvidenceScorer, HeuristicDetector, SignalDetector};
pub use ledger::{Ledger, LedgerBuilder};
pub use registry::{Registry, RegistryLoader};
pub use scanner::Corpus;
