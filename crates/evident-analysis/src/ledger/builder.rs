//! Scores every requirement and assembles the ledger.

use chrono::{DateTime, Utc};
use evident_core::constants::LEDGER_FORMAT_VERSION;
use rayon::prelude::*;

use crate::evidence::{EvidenceScorer, ScoredRequirement, SignalDetector};
use crate::registry::Registry;
use crate::scanner::Corpus;

use super::types::{Ledger, LedgerSection, LedgerSummary};

/// Builds a [`Ledger`] from a registry, a scorer and a corpus.
///
/// Requirements within a section are scored in parallel; output order
/// always follows registry order.
pub struct LedgerBuilder<'a, D> {
    scorer: &'a EvidenceScorer<D>,
    generated_at: Option<DateTime<Utc>>,
}

impl<'a, D: SignalDetector> LedgerBuilder<'a, D> {
    pub fn new(scorer: &'a EvidenceScorer<D>) -> Self {
        Self {
            scorer,
            generated_at: None,
        }
    }

    /// Pin the generation timestamp instead of using the current time.
    pub fn generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }

    pub fn build(&self, registry: &Registry, corpus: &Corpus) -> Ledger {
        let sections: Vec<LedgerSection> = registry
            .sections
            .iter()
            .map(|section| {
                let requirements: Vec<ScoredRequirement> = section
                    .requirements
                    .par_iter()
                    .map(|req| self.scorer.score(req, corpus))
                    .collect();
                LedgerSection {
                    key: section.key.clone(),
                    title: section.title.clone(),
                    summary: LedgerSummary::from_requirements(&requirements),
                    requirements,
                }
            })
            .collect();

        let summary = LedgerSummary::from_requirements(sections.iter().flat_map(|s| s.requirements.iter()));
        tracing::info!(
            total = summary.total,
            covered = summary.covered,
            partial = summary.partial,
            missing = summary.missing,
            average_confidence = summary.average_confidence,
            "ledger built"
        );

        Ledger {
            format_version: LEDGER_FORMAT_VERSION.to_string(),
            generated_at: self.generated_at.unwrap_or_else(Utc::now),
            thresholds: self.scorer.thresholds(),
            summary,
            sections,
        }
    }
}
