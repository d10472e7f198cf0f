//! Console reporter: summary block, confidence histogram, full listing,
//! gate outcomes.

use std::fmt::Write as _;

use crate::enforcement::gates::{GateReport, GateStatus};
use crate::evidence::{CoverageStatus, ScoredRequirement};
use crate::ledger::Ledger;
use crate::registry::Registry;
use crate::scanner::ScanStats;

use super::Reporter;

/// Histogram bands, highest first: (label, low, high) inclusive.
pub const HISTOGRAM_BANDS: [(&str, u32, u32); 4] = [
    ("90-100", 90, 100),
    ("60-89", 60, 89),
    ("30-59", 30, 59),
    ("0-29", 0, 29),
];

const BAR_WIDTH: usize = 40;

/// Console reporter for human-readable terminal output.
pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// One-line progress counts printed before scoring.
    pub fn progress(registry: &Registry, stats: &ScanStats) -> String {
        format!(
            "Registry: {} section(s), {} requirement(s)\nCorpus: {} file(s) ({} test, {} tooling) across {} root(s)\n",
            registry.section_count(),
            registry.requirement_count(),
            stats.total_files,
            stats.test_files,
            stats.tooling_files,
            stats.roots_scanned,
        )
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if self.use_color {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    fn status_cell(&self, status: CoverageStatus) -> String {
        let padded = format!("{:<7}", status.as_str());
        match status {
            CoverageStatus::Covered => self.paint(&padded, "32"),
            CoverageStatus::Partial => self.paint(&padded, "33"),
            CoverageStatus::Missing => self.paint(&padded, "31"),
        }
    }

    fn gate_label(&self, status: GateStatus) -> String {
        let label = format!("[{}]", status.label());
        match status {
            GateStatus::Passed => self.paint(&label, "32"),
            GateStatus::Warned => self.paint(&label, "33"),
            GateStatus::Failed => self.paint(&label, "31"),
        }
    }
}

/// Requirement counts per histogram band, in band order.
pub fn histogram<'a, I>(requirements: I) -> [usize; 4]
where
    I: IntoIterator<Item = &'a ScoredRequirement>,
{
    let mut counts = [0usize; 4];
    for req in requirements {
        if let Some(i) = HISTOGRAM_BANDS
            .iter()
            .position(|&(_, low, high)| (low..=high).contains(&req.confidence))
        {
            counts[i] += 1;
        }
    }
    counts
}

/// Requirements sorted ascending by confidence, ties broken by ID.
pub fn listing_order(ledger: &Ledger) -> Vec<&ScoredRequirement> {
    let mut reqs: Vec<&ScoredRequirement> = ledger.requirements().collect();
    reqs.sort_by(|a, b| a.confidence.cmp(&b.confidence).then_with(|| a.id.cmp(&b.id)));
    reqs
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, ledger: &Ledger, gates: Option<&GateReport>) -> Result<String, String> {
        let mut out = String::new();
        self.write_report(&mut out, ledger, gates)
            .map_err(|e| e.to_string())?;
        Ok(out)
    }
}

impl ConsoleReporter {
    fn write_report(
        &self,
        out: &mut String,
        ledger: &Ledger,
        gates: Option<&GateReport>,
    ) -> std::fmt::Result {
        let s = &ledger.summary;
        writeln!(out, "Evidence ledger ({})", ledger.format_version)?;
        writeln!(out, "  requirements      {}", s.total)?;
        writeln!(out, "  covered           {}", s.covered)?;
        writeln!(out, "  partial           {}", s.partial)?;
        writeln!(out, "  missing           {}", s.missing)?;
        writeln!(out, "  mean confidence   {:.1}", s.average_confidence)?;
        writeln!(out, "  coverage          {:.1}%", s.coverage_percent)?;
        writeln!(out, "  weighted score    {:.1}", s.weighted_score)?;
        writeln!(out)?;

        writeln!(out, "Confidence distribution")?;
        let counts = histogram(ledger.requirements());
        let max = counts.iter().copied().max().unwrap_or(0);
        for ((label, _, _), count) in HISTOGRAM_BANDS.iter().zip(counts) {
            let width = if max == 0 {
                0
            } else {
                (count * BAR_WIDTH).div_ceil(max)
            };
            writeln!(out, "  {label:>6} | {:<BAR_WIDTH$} {count}", "#".repeat(width))?;
        }
        writeln!(out)?;

        writeln!(out, "Requirements (ascending confidence)")?;
        for req in listing_order(ledger) {
            writeln!(
                out,
                "  {:>3}  {}  {} w{:<2} {:<16} {}  [{}]",
                req.confidence,
                self.status_cell(req.status),
                req.severity,
                req.weight,
                req.id,
                req.title,
                req.signals.abbreviations(),
            )?;
        }

        let Some(report) = gates else {
            writeln!(out)?;
            writeln!(out, "Gates skipped")?;
            return Ok(());
        };

        writeln!(out)?;
        writeln!(out, "Gates")?;
        for result in &report.results {
            writeln!(
                out,
                "  {} {} {}: {}",
                self.gate_label(result.status),
                result.gate_id,
                result.name,
                result.summary
            )?;
            if result.status != GateStatus::Passed {
                for violation in &result.violations {
                    writeln!(out, "      - {violation}")?;
                }
            }
        }
        writeln!(out)?;
        writeln!(
            out,
            "Result: {} failure(s), {} warning(s)",
            report.failures(),
            report.warnings()
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evidence::{SignalSet, Thresholds};
    use crate::ledger::{LedgerSection, LedgerSummary};
    use crate::registry::Severity;
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeMap;

    fn scored(id: &str, confidence: u32) -> ScoredRequirement {
        ScoredRequirement {
            id: id.to_string(),
            title: format!("title of {id}"),
            severity: Severity::S1,
            weight: 1,
            confidence,
            status: Thresholds::default().classify(confidence),
            signals: SignalSet::default(),
            evidence: BTreeMap::new(),
        }
    }

    fn ledger(reqs: Vec<ScoredRequirement>) -> Ledger {
        let summary = LedgerSummary::from_requirements(&reqs);
        Ledger {
            format_version: "test".to_string(),
            generated_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            thresholds: Thresholds::default(),
            summary: summary.clone(),
            sections: vec![LedgerSection {
                key: "s".to_string(),
                title: "S".to_string(),
                summary,
                requirements: reqs,
            }],
        }
    }

    #[test]
    fn test_histogram_band_edges() {
        let reqs = vec![
            scored("REQ-A-001", 100),
            scored("REQ-A-002", 90),
            scored("REQ-A-003", 89),
            scored("REQ-A-004", 60),
            scored("REQ-A-005", 59),
            scored("REQ-A-006", 30),
            scored("REQ-A-007", 29),
            scored("REQ-A-008", 0),
        ];
        assert_eq!(histogram(&reqs), [2, 2, 2, 2]);
    }

    #[test]
    fn test_listing_ascending_with_id_tiebreak() {
        let l = ledger(vec![
            scored("REQ-A-003", 40),
            scored("REQ-A-002", 40),
            scored("REQ-A-001", 80),
            scored("REQ-A-004", 0),
        ]);
        let ids: Vec<&str> = listing_order(&l).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["REQ-A-004", "REQ-A-002", "REQ-A-003", "REQ-A-001"]);
    }

    #[test]
    fn test_report_without_gates() {
        let l = ledger(vec![scored("REQ-A-001", 20)]);
        let out = ConsoleReporter::new(false).generate(&l, None).unwrap();
        assert!(out.contains("REQ-A-001"));
        assert!(out.contains("Gates skipped"));
        assert!(out.contains("[-]"));
        assert!(!out.contains("\x1b["));
    }
}
