//! Reporters: output formats for the ledger and gate results.

pub mod console;
pub mod json;

use crate::enforcement::gates::GateReport;
use crate::ledger::Ledger;

pub use console::ConsoleReporter;
pub use json::JsonReporter;

/// Trait for report generation. `gates` is `None` when gates were skipped.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, ledger: &Ledger, gates: Option<&GateReport>) -> Result<String, String>;
}

/// Format names accepted by [`create_reporter`].
pub const REPORT_FORMATS: [&str; 2] = ["console", "json"];

/// Create a reporter by format name. `use_color` only affects the console
/// format.
pub fn create_reporter(format: &str, use_color: bool) -> Option<Box<dyn Reporter>> {
    match format {
        "json" => Some(Box::new(JsonReporter)),
        "console" => Some(Box::new(ConsoleReporter::new(use_color))),
        _ => None,
    }
}
