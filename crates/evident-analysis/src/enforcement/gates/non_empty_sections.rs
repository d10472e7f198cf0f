//! G5: every section declares at least one requirement.

use super::types::*;

pub struct NonEmptySectionsGate {
    class: GateClass,
}

impl Default for NonEmptySectionsGate {
    fn default() -> Self {
        Self {
            class: GateClass::Fail,
        }
    }
}

impl QualityGate for NonEmptySectionsGate {
    fn id(&self) -> GateId {
        GateId::NonEmptySections
    }

    fn name(&self) -> &'static str {
        "Non-empty sections"
    }

    fn description(&self) -> &'static str {
        "Every registry section contains a requirement"
    }

    fn class(&self) -> GateClass {
        self.class
    }

    fn evaluate(&self, input: &GateInput<'_>) -> GateResult {
        let violations: Vec<String> = input
            .registry
            .sections
            .iter()
            .filter(|s| s.requirements.is_empty())
            .map(|s| format!("section '{}' has no requirements", s.key))
            .collect();

        let empty = violations.len();
        GateResult::from_violations(
            self.id(),
            self.name(),
            self.class,
            format!("{} section(s) populated", input.registry.section_count()),
            format!("{empty} empty section(s)"),
            violations,
        )
    }
}
