//! One end-to-end run.

use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use evident_analysis::enforcement::gates::{GateReport, GateRunner};
use evident_analysis::enforcement::reporters::{create_reporter, ConsoleReporter, JsonReporter, Reporter};
use evident_analysis::evidence::trace::TraceWindow;
use evident_analysis::evidence::{EvidenceScorer, HeuristicDetector, Thresholds};
use evident_analysis::ledger::{write_ledger, Ledger, LedgerBuilder};
use evident_analysis::registry::RegistryLoader;
use evident_analysis::scanner::{Corpus, CorpusOptions};
use evident_core::config::EvidentConfig;
use evident_core::constants::DEFAULT_CONFIG_FILE;
use evident_core::errors::{ConfigError, GateError, PipelineError};
use tracing::info;

use crate::args::Cli;

/// What a completed run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub ledger_path: PathBuf,
    pub ledger: Ledger,
    /// `None` when gates were skipped.
    pub gates: Option<GateReport>,
}

impl RunSummary {
    pub fn failures(&self) -> usize {
        self.gates.as_ref().map_or(0, GateReport::failures)
    }

    pub fn warnings(&self) -> usize {
        self.gates.as_ref().map_or(0, GateReport::warnings)
    }
}

/// Run the scan and write the console report to `out`.
///
/// Fatal conditions (bad config, unreadable registry, unwritable ledger)
/// surface as a [`PipelineError`] inside the returned error. Gate
/// violations do not: they are counted in the [`RunSummary`].
pub fn run(cli: &Cli, out: &mut dyn Write) -> anyhow::Result<RunSummary> {
    let config = load_config(cli).map_err(PipelineError::from)?;

    let registry_path = cli
        .registry
        .clone()
        .unwrap_or_else(|| config.output.effective_registry());
    let ledger_path = cli
        .ledger
        .clone()
        .unwrap_or_else(|| config.output.effective_ledger());

    let use_color = !cli.no_color && std::io::stdout().is_terminal();
    let format = cli.effective_format();
    let reporter = create_reporter(format, use_color)
        .with_context(|| format!("unknown report format `{format}`"))?;
    // Only the console format carries progress lines.
    let chatty = reporter.name() == "console";

    let registry = RegistryLoader::load(&registry_path).map_err(PipelineError::from)?;

    let mut options = CorpusOptions::from(&config.scan);
    if !cli.roots.is_empty() {
        options.roots = cli.roots.clone();
    }
    let corpus = Corpus::discover(&options);
    corpus.preload();
    if chatty {
        write!(out, "{}", ConsoleReporter::progress(&registry, corpus.stats()))?;
    }

    let scorer = EvidenceScorer::new(
        HeuristicDetector::new(TraceWindow::from(&config.trace)),
        Thresholds::from(&config.scoring),
    );
    let ledger = LedgerBuilder::new(&scorer).build(&registry, &corpus);
    write_ledger(&ledger_path, &ledger).map_err(PipelineError::from)?;
    if chatty {
        writeln!(out, "Ledger written to {}\n", ledger_path.display())?;
    }

    let gates = if cli.ledger_only {
        info!("gates skipped");
        None
    } else {
        Some(GateRunner::new(&config.gates).run(&ledger, &registry))
    };

    let text = reporter
        .generate(&ledger, gates.as_ref())
        .map_err(|e| anyhow::anyhow!(e))
        .with_context(|| format!("rendering {} report", reporter.name()))?;
    out.write_all(text.as_bytes())?;

    if let Some(path) = &cli.gate_report {
        write_gate_report(path, &ledger, gates.as_ref()).map_err(PipelineError::from)?;
    }

    Ok(RunSummary {
        ledger_path,
        ledger,
        gates,
    })
}

fn load_config(cli: &Cli) -> Result<EvidentConfig, ConfigError> {
    match &cli.config {
        Some(path) => EvidentConfig::load(path),
        None => EvidentConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE)),
    }
}

fn write_gate_report(
    path: &Path,
    ledger: &Ledger,
    gates: Option<&GateReport>,
) -> Result<(), GateError> {
    let json = JsonReporter
        .generate(ledger, gates)
        .map_err(GateError::Report)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| GateError::Report(format!("{}: {e}", parent.display())))?;
    }
    std::fs::write(path, json).map_err(|e| GateError::Report(format!("{}: {e}", path.display())))?;
    info!(path = %path.display(), "gate report written");
    Ok(())
}
