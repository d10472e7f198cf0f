//! Ledger document types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::evidence::{CoverageStatus, ScoredRequirement, Thresholds};

/// Summary statistics over a set of scored requirements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub total: usize,
    pub covered: usize,
    pub partial: usize,
    pub missing: usize,
    /// Arithmetic mean confidence, one decimal.
    pub average_confidence: f64,
    /// covered / total × 100, one decimal.
    pub coverage_percent: f64,
    /// Σ(confidence·weight) / Σ(weight·100) × 100, one decimal.
    pub weighted_score: f64,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl LedgerSummary {
    /// Compute statistics; every figure is zero for an empty input.
    pub fn from_requirements<'a, I>(requirements: I) -> Self
    where
        I: IntoIterator<Item = &'a ScoredRequirement>,
    {
        let mut summary = Self::default();
        let mut confidence_sum: u64 = 0;
        let mut weighted_sum: u64 = 0;
        let mut weight_sum: u64 = 0;

        for req in requirements {
            summary.total += 1;
            match req.status {
                CoverageStatus::Covered => summary.covered += 1,
                CoverageStatus::Partial => summary.partial += 1,
                CoverageStatus::Missing => summary.missing += 1,
            }
            confidence_sum += u64::from(req.confidence);
            weighted_sum += u64::from(req.confidence) * u64::from(req.weight);
            weight_sum += u64::from(req.weight);
        }

        if summary.total == 0 {
            return summary;
        }
        let total = summary.total as f64;
        summary.average_confidence = round1(confidence_sum as f64 / total);
        summary.coverage_percent = round1(summary.covered as f64 / total * 100.0);
        // Σ(c·w) / Σ(w·100) × 100, reduced to Σ(c·w) / Σw.
        summary.weighted_score = if weight_sum == 0 {
            0.0
        } else {
            round1(weighted_sum as f64 / weight_sum as f64)
        };
        summary
    }
}

/// One registry section with its scored requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerSection {
    pub key: String,
    pub title: String,
    pub summary: LedgerSummary,
    pub requirements: Vec<ScoredRequirement>,
}

/// The persisted artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    pub format_version: String,
    pub generated_at: DateTime<Utc>,
    pub thresholds: Thresholds,
    pub summary: LedgerSummary,
    pub sections: Vec<LedgerSection>,
}

impl Ledger {
    /// Every scored requirement, in section order.
    pub fn requirements(&self) -> impl Iterator<Item = &ScoredRequirement> {
        self.sections.iter().flat_map(|s| s.requirements.iter())
    }
}
