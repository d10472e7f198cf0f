//! G4: requirement IDs are unique across the whole registry.

use crate::registry::Registry;
use evident_core::types::collections::FxHashMap;

use super::types::*;

pub struct UniqueIdsGate {
    class: GateClass,
}

impl Default for UniqueIdsGate {
    fn default() -> Self {
        Self {
            class: GateClass::Fail,
        }
    }
}

/// IDs declared more than once, with the section of every occurrence,
/// in first-seen order.
pub fn duplicate_ids(registry: &Registry) -> Vec<(String, Vec<String>)> {
    let mut order: Vec<&str> = Vec::new();
    let mut seen: FxHashMap<&str, Vec<String>> = FxHashMap::default();
    for section in &registry.sections {
        for req in &section.requirements {
            let entry = seen.entry(req.id.as_str()).or_insert_with(|| {
                order.push(req.id.as_str());
                Vec::new()
            });
            entry.push(section.key.clone());
        }
    }
    order
        .into_iter()
        .filter_map(|id| {
            let sections = seen.remove(id)?;
            (sections.len() > 1).then(|| (id.to_string(), sections))
        })
        .collect()
}

impl QualityGate for UniqueIdsGate {
    fn id(&self) -> GateId {
        GateId::UniqueIds
    }

    fn name(&self) -> &'static str {
        "Unique requirement IDs"
    }

    fn description(&self) -> &'static str {
        "No requirement ID is declared twice, in any section"
    }

    fn class(&self) -> GateClass {
        self.class
    }

    fn evaluate(&self, input: &GateInput<'_>) -> GateResult {
        let violations: Vec<String> = duplicate_ids(input.registry)
            .into_iter()
            .map(|(id, sections)| {
                format!(
                    "{id} declared {} times (sections: {})",
                    sections.len(),
                    sections.join(", ")
                )
            })
            .collect();

        let duplicated = violations.len();
        GateResult::from_violations(
            self.id(),
            self.name(),
            self.class,
            format!(
                "{} requirement ID(s) unique",
                input.registry.requirement_count()
            ),
            format!("{duplicated} duplicated requirement ID(s)"),
            violations,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Requirement, Section};

    fn section(key: &str, ids: &[&str]) -> Section {
        Section {
            key: key.to_string(),
            title: key.to_string(),
            requirements: ids.iter().map(|id| Requirement::new(*id, "")).collect(),
        }
    }

    #[test]
    fn test_duplicates_in_first_seen_order() {
        let registry = Registry {
            sections: vec![
                section("a", &["REQ-A-002", "REQ-A-001"]),
                section("b", &["REQ-A-001", "REQ-A-002", "REQ-B-001"]),
            ],
            global_gates: Vec::new(),
        };
        let dups = duplicate_ids(&registry);
        assert_eq!(dups.len(), 2);
        assert_eq!(dups[0].0, "REQ-A-002");
        assert_eq!(dups[1], ("REQ-A-001".to_string(), vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_no_duplicates() {
        let registry = Registry {
            sections: vec![section("a", &["REQ-A-001"]), section("b", &["REQ-B-001"])],
            global_gates: Vec::new(),
        };
        assert!(duplicate_ids(&registry).is_empty());
    }
}
