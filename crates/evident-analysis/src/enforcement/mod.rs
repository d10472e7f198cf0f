//! Enforcement layer: turns the ledger into pass/warn/fail decisions.
//!
//! - `gates`: six fixed policy checks and the runner
//! - `reporters`: console and JSON output

pub mod gates;
pub mod reporters;
