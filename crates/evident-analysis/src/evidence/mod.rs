//! Evidence engine: seven independent heuristic signals per requirement,
//! each worth a fixed number of points, summed into a 0–100 confidence.
//!
//! Detection is a strategy behind [`SignalDetector`]; scoring, aggregation
//! and gating only see the resulting [`SignalSet`].

pub mod detector;
pub mod scorer;
pub mod signals;
pub mod trace;

pub use detector::{Detection, HeuristicDetector, SignalDetector};
pub use scorer::{CoverageStatus, EvidenceScorer, ScoredRequirement, Thresholds};
pub use signals::{Signal, SignalSet};
