//! # evident CLI entry point

use std::process::ExitCode;

use clap::Parser;
use evident_cli::{run, Cli};
use evident_core::errors::{EvidentErrorCode, GateError, PipelineError};
use evident_core::tracing::init_tracing;

/// Exit status when a fail-class gate is violated.
const EXIT_GATE_FAILURE: u8 = 1;
/// Exit status for fatal errors before or while writing the ledger.
const EXIT_FATAL: u8 = 2;

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match run(&cli, &mut out) {
        Ok(summary) if summary.failures() > 0 => {
            let err = GateError::Failed {
                failures: summary.failures(),
            };
            tracing::error!(warnings = summary.warnings(), "{}", err.coded_string());
            ExitCode::from(EXIT_GATE_FAILURE)
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<PipelineError>() {
                Some(pipeline) => eprintln!("{}", pipeline.coded_string()),
                None => eprintln!("error: {e:#}"),
            }
            ExitCode::from(EXIT_FATAL)
        }
    }
}
