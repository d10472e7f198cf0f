//! G6: every declared global gate is claimed by some requirement.

use evident_core::types::collections::FxHashSet;

use super::types::*;

pub struct GlobalGateReferencesGate {
    class: GateClass,
}

impl GlobalGateReferencesGate {
    pub fn with_class(class: GateClass) -> Self {
        Self { class }
    }
}

impl Default for GlobalGateReferencesGate {
    fn default() -> Self {
        Self::with_class(GateClass::Warn)
    }
}

impl QualityGate for GlobalGateReferencesGate {
    fn id(&self) -> GateId {
        GateId::GlobalGateReferences
    }

    fn name(&self) -> &'static str {
        "Global gate references"
    }

    fn description(&self) -> &'static str {
        "Every global gate name is referenced by at least one requirement"
    }

    fn class(&self) -> GateClass {
        self.class
    }

    fn evaluate(&self, input: &GateInput<'_>) -> GateResult {
        let referenced: FxHashSet<&str> = input
            .registry
            .requirements()
            .flat_map(|r| r.gates.iter().map(String::as_str))
            .collect();

        let violations: Vec<String> = input
            .registry
            .global_gates
            .iter()
            .filter(|g| !referenced.contains(g.as_str()))
            .map(|g| format!("global gate '{g}' is not referenced by any requirement"))
            .collect();

        let orphaned = violations.len();
        GateResult::from_violations(
            self.id(),
            self.name(),
            self.class,
            format!(
                "{} global gate(s) referenced",
                input.registry.global_gates.len()
            ),
            format!("{orphaned} unreferenced global gate(s)"),
            violations,
        )
    }
}
