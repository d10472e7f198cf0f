//! Property tests for scoring and summary invariants.

use std::collections::BTreeMap;

use evident_analysis::evidence::{CoverageStatus, ScoredRequirement, Signal, SignalSet, Thresholds};
use evident_analysis::ledger::LedgerSummary;
use evident_analysis::registry::Severity;
use proptest::prelude::*;

fn scored(i: usize, confidence: u32, weight: u32) -> ScoredRequirement {
    ScoredRequirement {
        id: format!("REQ-P-{i:03}"),
        title: String::new(),
        severity: Severity::S3,
        weight,
        confidence,
        status: Thresholds::default().classify(confidence),
        signals: SignalSet::default(),
        evidence: BTreeMap::new(),
    }
}

proptest! {
    #[test]
    fn confidence_is_bounded_sum_of_active_weights(flags in prop::collection::vec(any::<bool>(), 7)) {
        let mut set = SignalSet::default();
        for (signal, on) in Signal::all().iter().zip(&flags) {
            set.set(*signal, *on);
        }
        let expected: u32 = Signal::all()
            .iter()
            .zip(&flags)
            .filter(|(_, on)| **on)
            .map(|(s, _)| s.weight())
            .sum();
        prop_assert!(set.confidence() <= 100);
        prop_assert_eq!(set.confidence(), expected);
    }

    #[test]
    fn status_partition_is_exhaustive(confidence in 0u32..=100) {
        let status = Thresholds::default().classify(confidence);
        let expected = if confidence >= 60 {
            CoverageStatus::Covered
        } else if confidence >= 30 {
            CoverageStatus::Partial
        } else {
            CoverageStatus::Missing
        };
        prop_assert_eq!(status, expected);
    }

    #[test]
    fn status_is_monotonic(a in 0u32..=100, b in 0u32..=100) {
        let t = Thresholds::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(t.classify(lo) <= t.classify(hi));
    }

    #[test]
    fn equal_weights_score_equals_mean(
        confidences in prop::collection::vec(0u32..=100, 1..60),
        weight in 1u32..10,
    ) {
        let reqs: Vec<ScoredRequirement> = confidences
            .iter()
            .enumerate()
            .map(|(i, c)| scored(i, *c, weight))
            .collect();
        let summary = LedgerSummary::from_requirements(&reqs);
        prop_assert_eq!(summary.weighted_score, summary.average_confidence);
    }

    #[test]
    fn summary_counts_partition_total(
        entries in prop::collection::vec((0u32..=100, 1u32..6), 0..60),
    ) {
        let reqs: Vec<ScoredRequirement> = entries
            .iter()
            .enumerate()
            .map(|(i, (c, w))| scored(i, *c, *w))
            .collect();
        let summary = LedgerSummary::from_requirements(&reqs);
        prop_assert_eq!(summary.covered + summary.partial + summary.missing, summary.total);
        prop_assert!((0.0..=100.0).contains(&summary.average_confidence));
        prop_assert!((0.0..=100.0).contains(&summary.weighted_score));
        prop_assert!((0.0..=100.0).contains(&summary.coverage_percent));
    }

    #[test]
    fn summary_is_order_independent(
        entries in prop::collection::vec((0u32..=100, 1u32..6), 1..40),
    ) {
        let reqs: Vec<ScoredRequirement> = entries
            .iter()
            .enumerate()
            .map(|(i, (c, w))| scored(i, *c, *w))
            .collect();
        let mut reversed = reqs.clone();
        reversed.reverse();
        prop_assert_eq!(
            LedgerSummary::from_requirements(&reqs),
            LedgerSummary::from_requirements(&reversed)
        );
    }
}
