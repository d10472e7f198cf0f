//! # evident-cli
//!
//! Argument parsing and the end-to-end run: load config and registry,
//! index the corpus, score, write the ledger, evaluate gates, report.
//!
//! Business logic lives in `evident-analysis`; this crate only wires it.

pub mod args;
pub mod run;

pub use args::Cli;
pub use run::{run, RunSummary};
