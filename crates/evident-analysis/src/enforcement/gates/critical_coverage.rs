//! G1: every highest-severity requirement reaches at least `partial`.

use crate::evidence::CoverageStatus;
use crate::registry::Severity;

use super::types::*;

pub struct CriticalCoverageGate {
    class: GateClass,
}

impl CriticalCoverageGate {
    pub fn with_class(class: GateClass) -> Self {
        Self { class }
    }
}

impl Default for CriticalCoverageGate {
    fn default() -> Self {
        Self::with_class(GateClass::Warn)
    }
}

impl QualityGate for CriticalCoverageGate {
    fn id(&self) -> GateId {
        GateId::CriticalCoverage
    }

    fn name(&self) -> &'static str {
        "Critical coverage"
    }

    fn description(&self) -> &'static str {
        "Every S0 requirement has at least partial evidence"
    }

    fn class(&self) -> GateClass {
        self.class
    }

    fn evaluate(&self, input: &GateInput<'_>) -> GateResult {
        let mut critical = 0usize;
        let mut violations = Vec::new();
        for req in input.ledger.requirements() {
            if req.severity != Severity::HIGHEST {
                continue;
            }
            critical += 1;
            if req.status < CoverageStatus::Partial {
                violations.push(format!(
                    "{} ({}) is missing at {}%",
                    req.id, req.severity, req.confidence
                ));
            }
        }

        let missing = violations.len();
        GateResult::from_violations(
            self.id(),
            self.name(),
            self.class,
            format!("{critical} S0 requirement(s) at least partial"),
            format!("{missing} of {critical} S0 requirement(s) missing"),
            violations,
        )
    }
}
