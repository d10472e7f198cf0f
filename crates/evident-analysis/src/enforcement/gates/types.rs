//! Core types for gates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ledger::Ledger;
use crate::registry::Registry;

/// The six gate identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GateId {
    /// G1: highest-severity requirements are at least partial.
    CriticalCoverage,
    /// G2: heavily weighted requirements are not missing.
    HeavyWeightCoverage,
    /// G3: mean confidence meets the baseline.
    ConfidenceBaseline,
    /// G4: requirement IDs are unique.
    UniqueIds,
    /// G5: every section has a requirement.
    NonEmptySections,
    /// G6: every global gate is referenced.
    GlobalGateReferences,
}

impl GateId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CriticalCoverage => "G1",
            Self::HeavyWeightCoverage => "G2",
            Self::ConfidenceBaseline => "G3",
            Self::UniqueIds => "G4",
            Self::NonEmptySections => "G5",
            Self::GlobalGateReferences => "G6",
        }
    }

    pub fn all() -> &'static [GateId] {
        &[
            Self::CriticalCoverage,
            Self::HeavyWeightCoverage,
            Self::ConfidenceBaseline,
            Self::UniqueIds,
            Self::NonEmptySections,
            Self::GlobalGateReferences,
        ]
    }
}

impl fmt::Display for GateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a violation of the gate means for the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateClass {
    /// Structural integrity: breaks the build.
    Fail,
    /// Coverage insufficiency: advisory.
    Warn,
}

/// Gate execution status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateStatus {
    Passed,
    Failed,
    Warned,
}

impl GateStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Passed => "PASS",
            Self::Failed => "FAIL",
            Self::Warned => "WARN",
        }
    }
}

/// Result produced by each gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateResult {
    pub gate_id: GateId,
    pub name: String,
    pub status: GateStatus,
    pub passed: bool,
    pub summary: String,
    pub violations: Vec<String>,
}

impl GateResult {
    /// Create a passing gate result.
    pub fn pass(gate_id: GateId, name: &str, summary: String) -> Self {
        Self {
            gate_id,
            name: name.to_string(),
            status: GateStatus::Passed,
            passed: true,
            summary,
            violations: Vec::new(),
        }
    }

    /// Create a violated result; `class` decides between fail and warn.
    pub fn violated(
        gate_id: GateId,
        name: &str,
        class: GateClass,
        summary: String,
        violations: Vec<String>,
    ) -> Self {
        let (status, passed) = match class {
            GateClass::Fail => (GateStatus::Failed, false),
            GateClass::Warn => (GateStatus::Warned, true),
        };
        Self {
            gate_id,
            name: name.to_string(),
            status,
            passed,
            summary,
            violations,
        }
    }

    /// `pass` when `violations` is empty, otherwise `violated`.
    pub fn from_violations(
        gate_id: GateId,
        name: &str,
        class: GateClass,
        pass_summary: String,
        fail_summary: String,
        violations: Vec<String>,
    ) -> Self {
        if violations.is_empty() {
            Self::pass(gate_id, name, pass_summary)
        } else {
            Self::violated(gate_id, name, class, fail_summary, violations)
        }
    }
}

/// Input provided to each gate by the runner.
#[derive(Debug, Clone, Copy)]
pub struct GateInput<'a> {
    pub ledger: &'a Ledger,
    pub registry: &'a Registry,
}

/// Trait for gate implementations.
pub trait QualityGate: Send + Sync {
    fn id(&self) -> GateId;
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    /// Class applied when the gate is violated.
    fn class(&self) -> GateClass;
    fn evaluate(&self, input: &GateInput<'_>) -> GateResult;
}
