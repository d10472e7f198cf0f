//! Confidence scoring and status classification.

use std::collections::BTreeMap;
use std::fmt;

use evident_core::config::ScoringConfig;
use evident_core::constants;
use serde::{Deserialize, Serialize};

use crate::registry::{Requirement, Severity};
use crate::scanner::Corpus;

use super::detector::{HeuristicDetector, SignalDetector};
use super::signals::SignalSet;

/// Coverage classification, ordered from least to most covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageStatus {
    Missing,
    Partial,
    Covered,
}

impl CoverageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Partial => "partial",
            Self::Covered => "covered",
        }
    }
}

impl fmt::Display for CoverageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Confidence cut-offs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    pub covered: u32,
    pub partial: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            covered: constants::DEFAULT_COVERED_THRESHOLD,
            partial: constants::DEFAULT_PARTIAL_THRESHOLD,
        }
    }
}

impl From<&ScoringConfig> for Thresholds {
    fn from(config: &ScoringConfig) -> Self {
        Self {
            covered: config.effective_covered_threshold(),
            partial: config.effective_partial_threshold(),
        }
    }
}

impl Thresholds {
    pub fn classify(&self, confidence: u32) -> CoverageStatus {
        if confidence >= self.covered {
            CoverageStatus::Covered
        } else if confidence >= self.partial {
            CoverageStatus::Partial
        } else {
            CoverageStatus::Missing
        }
    }
}

/// A requirement with its evidence and score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredRequirement {
    pub id: String,
    pub title: String,
    pub severity: Severity,
    pub weight: u32,
    pub confidence: u32,
    pub status: CoverageStatus,
    pub signals: SignalSet,
    pub evidence: BTreeMap<String, String>,
}

/// Applies a detector and the thresholds to requirements.
pub struct EvidenceScorer<D = HeuristicDetector> {
    detector: D,
    thresholds: Thresholds,
}

impl Default for EvidenceScorer<HeuristicDetector> {
    fn default() -> Self {
        Self::new(HeuristicDetector::default(), Thresholds::default())
    }
}

impl<D: SignalDetector> EvidenceScorer<D> {
    pub fn new(detector: D, thresholds: Thresholds) -> Self {
        Self {
            detector,
            thresholds,
        }
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    pub fn score(&self, requirement: &Requirement, corpus: &Corpus) -> ScoredRequirement {
        let detection = self.detector.detect(requirement, corpus);
        let confidence = detection.signals.confidence();
        let status = self.thresholds.classify(confidence);
        tracing::debug!(
            id = %requirement.id,
            confidence,
            status = %status,
            signals = %detection.signals.abbreviations(),
            "requirement scored"
        );
        ScoredRequirement {
            id: requirement.id.clone(),
            title: requirement.title.clone(),
            severity: requirement.severity,
            weight: requirement.weight,
            confidence,
            status,
            signals: detection.signals,
            evidence: detection.evidence,
        }
    }
}
