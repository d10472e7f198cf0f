//! Gate runner: evaluates the six gates in fixed order.

use evident_core::config::GateConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::ledger::Ledger;
use crate::registry::Registry;

use super::confidence_baseline::ConfidenceBaselineGate;
use super::critical_coverage::CriticalCoverageGate;
use super::global_gate_references::GlobalGateReferencesGate;
use super::heavy_weight_coverage::HeavyWeightCoverageGate;
use super::non_empty_sections::NonEmptySectionsGate;
use super::types::*;
use super::unique_ids::UniqueIdsGate;

/// Outcome of one gate run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GateReport {
    pub results: Vec<GateResult>,
}

impl GateReport {
    /// Number of fail-class gates that were violated.
    pub fn failures(&self) -> usize {
        self.count(GateStatus::Failed)
    }

    /// Number of warn-class gates that were violated.
    pub fn warnings(&self) -> usize {
        self.count(GateStatus::Warned)
    }

    pub fn is_success(&self) -> bool {
        self.failures() == 0
    }

    pub fn result(&self, id: GateId) -> Option<&GateResult> {
        self.results.iter().find(|r| r.gate_id == id)
    }

    fn count(&self, status: GateStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }
}

/// Runs every gate against a ledger and its registry.
pub struct GateRunner {
    gates: Vec<Box<dyn QualityGate>>,
}

impl GateRunner {
    /// The six standard gates, with thresholds and strict promotion taken
    /// from `config`.
    pub fn new(config: &GateConfig) -> Self {
        let class = |id: GateId, default: GateClass| {
            if config.is_strict(id.as_str()) {
                GateClass::Fail
            } else {
                default
            }
        };

        let gates: Vec<Box<dyn QualityGate>> = vec![
            Box::new(CriticalCoverageGate::with_class(class(
                GateId::CriticalCoverage,
                GateClass::Warn,
            ))),
            Box::new(HeavyWeightCoverageGate::new(
                config.effective_heavy_weight(),
                class(GateId::HeavyWeightCoverage, GateClass::Warn),
            )),
            Box::new(ConfidenceBaselineGate::new(
                config.effective_confidence_baseline(),
                class(GateId::ConfidenceBaseline, GateClass::Warn),
            )),
            Box::new(UniqueIdsGate::default()),
            Box::new(NonEmptySectionsGate::default()),
            Box::new(GlobalGateReferencesGate::with_class(class(
                GateId::GlobalGateReferences,
                GateClass::Warn,
            ))),
        ];
        Self { gates }
    }

    pub fn gates(&self) -> &[Box<dyn QualityGate>] {
        &self.gates
    }

    /// Evaluate every gate. Violations are outcomes, never errors.
    pub fn run(&self, ledger: &Ledger, registry: &Registry) -> GateReport {
        let input = GateInput { ledger, registry };
        let results: Vec<GateResult> = self
            .gates
            .iter()
            .map(|gate| {
                debug!(gate = %gate.id(), name = gate.name(), "{}", gate.description());
                let result = gate.evaluate(&input);
                match result.status {
                    GateStatus::Passed => info!(gate = %result.gate_id, "{}", result.summary),
                    GateStatus::Warned => {
                        warn!(gate = %result.gate_id, violations = result.violations.len(), "{}", result.summary)
                    }
                    GateStatus::Failed => {
                        error!(gate = %result.gate_id, violations = result.violations.len(), "{}", result.summary)
                    }
                }
                result
            })
            .collect();

        let report = GateReport { results };
        info!(
            failures = report.failures(),
            warnings = report.warnings(),
            "gates evaluated"
        );
        report
    }
}

impl Default for GateRunner {
    fn default() -> Self {
        Self::new(&GateConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_gate_order() {
        let runner = GateRunner::default();
        let ids: Vec<GateId> = runner.gates().iter().map(|g| g.id()).collect();
        assert_eq!(ids, GateId::all());
    }

    #[test]
    fn test_default_classes() {
        let runner = GateRunner::default();
        let classes: Vec<GateClass> = runner.gates().iter().map(|g| g.class()).collect();
        assert_eq!(
            classes,
            vec![
                GateClass::Warn,
                GateClass::Warn,
                GateClass::Warn,
                GateClass::Fail,
                GateClass::Fail,
                GateClass::Warn,
            ]
        );
    }

    #[test]
    fn test_strict_promotes_to_fail() {
        let config = GateConfig {
            strict: vec!["g1".to_string(), "G2".to_string()],
            ..Default::default()
        };
        let runner = GateRunner::new(&config);
        assert_eq!(runner.gates()[0].class(), GateClass::Fail);
        assert_eq!(runner.gates()[1].class(), GateClass::Fail);
        assert_eq!(runner.gates()[2].class(), GateClass::Warn);
    }
}
