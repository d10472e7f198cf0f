//! G3: mean confidence across the ledger meets the baseline.

use evident_core::constants::DEFAULT_CONFIDENCE_BASELINE;

use super::types::*;

pub struct ConfidenceBaselineGate {
    class: GateClass,
    baseline: f64,
}

impl ConfidenceBaselineGate {
    pub fn new(baseline: f64, class: GateClass) -> Self {
        Self { class, baseline }
    }
}

impl Default for ConfidenceBaselineGate {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIDENCE_BASELINE, GateClass::Warn)
    }
}

impl QualityGate for ConfidenceBaselineGate {
    fn id(&self) -> GateId {
        GateId::ConfidenceBaseline
    }

    fn name(&self) -> &'static str {
        "Confidence baseline"
    }

    fn description(&self) -> &'static str {
        "Mean confidence meets the configured baseline"
    }

    fn class(&self) -> GateClass {
        self.class
    }

    fn evaluate(&self, input: &GateInput<'_>) -> GateResult {
        let mean = input.ledger.summary.average_confidence;
        if mean >= self.baseline {
            return GateResult::pass(
                self.id(),
                self.name(),
                format!("mean confidence {mean:.1} >= {:.1}", self.baseline),
            );
        }
        GateResult::violated(
            self.id(),
            self.name(),
            self.class,
            format!("mean confidence {mean:.1} below {:.1}", self.baseline),
            vec![format!(
                "mean confidence {mean:.1} across {} requirement(s)",
                input.ledger.summary.total
            )],
        )
    }
}
