//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use evident_analysis::enforcement::reporters::REPORT_FORMATS;

/// Compliance evidence scanner.
///
/// Scores every requirement in the registry against the source tree,
/// writes the evidence ledger, then evaluates the gates. Exits non-zero
/// when a fail-class gate is violated.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "evident", version, about)]
pub struct Cli {
    /// Write the ledger and skip gate evaluation.
    #[arg(long)]
    pub ledger_only: bool,

    /// Config file. Defaults to `evident.toml` when present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Registry document (overrides `[output] registry`).
    #[arg(long, value_name = "PATH")]
    pub registry: Option<PathBuf>,

    /// Ledger output path (overrides `[output] ledger`).
    #[arg(long, value_name = "PATH")]
    pub ledger: Option<PathBuf>,

    /// Root directory to scan; repeatable (overrides `[scan] roots`).
    #[arg(long = "root", value_name = "DIR")]
    pub roots: Vec<PathBuf>,

    /// Also write gate results as JSON.
    #[arg(long, value_name = "PATH")]
    pub gate_report: Option<PathBuf>,

    /// Report format written to stdout. Defaults to `console`.
    #[arg(long, value_name = "FORMAT", value_parser = REPORT_FORMATS)]
    pub format: Option<String>,

    /// Disable ANSI colors in the console report.
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn effective_format(&self) -> &str {
        self.format.as_deref().unwrap_or(REPORT_FORMATS[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::parse_from([
            "evident",
            "--ledger-only",
            "--root",
            "src",
            "--root",
            "tests",
            "--ledger",
            "out/ledger.json",
        ]);
        assert!(cli.ledger_only);
        assert_eq!(cli.roots, vec![PathBuf::from("src"), PathBuf::from("tests")]);
        assert_eq!(cli.ledger, Some(PathBuf::from("out/ledger.json")));
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_no_flags() {
        let cli = Cli::parse_from(["evident"]);
        assert!(!cli.ledger_only);
        assert!(cli.roots.is_empty());
        assert_eq!(cli.effective_format(), "console");
    }

    #[test]
    fn test_format_is_restricted() {
        let cli = Cli::parse_from(["evident", "--format", "json"]);
        assert_eq!(cli.effective_format(), "json");
        assert!(Cli::try_parse_from(["evident", "--format", "yaml"]).is_err());
    }
}
