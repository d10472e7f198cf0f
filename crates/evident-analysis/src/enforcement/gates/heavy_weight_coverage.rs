//! G2: no heavily weighted requirement is `missing`.

use evident_core::constants::DEFAULT_HEAVY_WEIGHT;

use crate::evidence::CoverageStatus;

use super::types::*;

pub struct HeavyWeightCoverageGate {
    class: GateClass,
    heavy_weight: u32,
}

impl HeavyWeightCoverageGate {
    pub fn new(heavy_weight: u32, class: GateClass) -> Self {
        Self {
            class,
            heavy_weight,
        }
    }
}

impl Default for HeavyWeightCoverageGate {
    fn default() -> Self {
        Self::new(DEFAULT_HEAVY_WEIGHT, GateClass::Warn)
    }
}

impl QualityGate for HeavyWeightCoverageGate {
    fn id(&self) -> GateId {
        GateId::HeavyWeightCoverage
    }

    fn name(&self) -> &'static str {
        "Heavy-weight coverage"
    }

    fn description(&self) -> &'static str {
        "No requirement at or above the heavy weight is missing"
    }

    fn class(&self) -> GateClass {
        self.class
    }

    fn evaluate(&self, input: &GateInput<'_>) -> GateResult {
        let mut heavy = 0usize;
        let mut violations = Vec::new();
        for req in input.ledger.requirements() {
            if req.weight < self.heavy_weight {
                continue;
            }
            heavy += 1;
            if req.status == CoverageStatus::Missing {
                violations.push(format!(
                    "{} (weight {}) is missing at {}%",
                    req.id, req.weight, req.confidence
                ));
            }
        }

        let missing = violations.len();
        GateResult::from_violations(
            self.id(),
            self.name(),
            self.class,
            format!(
                "{heavy} requirement(s) with weight >= {} have evidence",
                self.heavy_weight
            ),
            format!(
                "{missing} of {heavy} requirement(s) with weight >= {} missing",
                self.heavy_weight
            ),
            violations,
        )
    }
}
