//! The seven evidence signals and their point values.

use std::fmt;

use evident_core::constants;
use serde::{Deserialize, Serialize};

/// One independently computed piece of evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    Entity,
    Operation,
    Test,
    Report,
    EvidenceKind,
    GateReference,
    Traceability,
}

impl Signal {
    pub fn all() -> &'static [Signal] {
        &[
            Self::Entity,
            Self::Operation,
            Self::Test,
            Self::Report,
            Self::EvidenceKind,
            Self::GateReference,
            Self::Traceability,
        ]
    }

    /// Points contributed when the signal is active.
    pub fn weight(&self) -> u32 {
        match self {
            Self::Entity => constants::WEIGHT_ENTITY,
            Self::Operation => constants::WEIGHT_OPERATION,
            Self::Test => constants::WEIGHT_TEST,
            Self::Report => constants::WEIGHT_REPORT,
            Self::EvidenceKind => constants::WEIGHT_EVIDENCE_KIND,
            Self::GateReference => constants::WEIGHT_GATE_REFERENCE,
            Self::Traceability => constants::WEIGHT_TRACEABILITY,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Operation => "operation",
            Self::Test => "test",
            Self::Report => "report",
            Self::EvidenceKind => "evidence_kind",
            Self::GateReference => "gate_reference",
            Self::Traceability => "traceability",
        }
    }

    /// Short label for console listings.
    pub fn abbrev(&self) -> &'static str {
        match self {
            Self::Entity => "ent",
            Self::Operation => "op",
            Self::Test => "test",
            Self::Report => "rpt",
            Self::EvidenceKind => "evd",
            Self::GateReference => "gate",
            Self::Traceability => "trace",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The seven flags computed for one requirement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSet {
    pub entity: bool,
    pub operation: bool,
    pub test: bool,
    pub report: bool,
    pub evidence_kind: bool,
    pub gate_reference: bool,
    pub traceability: bool,
}

impl SignalSet {
    pub fn get(&self, signal: Signal) -> bool {
        match signal {
            Signal::Entity => self.entity,
            Signal::Operation => self.operation,
            Signal::Test => self.test,
            Signal::Report => self.report,
            Signal::EvidenceKind => self.evidence_kind,
            Signal::GateReference => self.gate_reference,
            Signal::Traceability => self.traceability,
        }
    }

    pub fn set(&mut self, signal: Signal, value: bool) {
        let slot = match signal {
            Signal::Entity => &mut self.entity,
            Signal::Operation => &mut self.operation,
            Signal::Test => &mut self.test,
            Signal::Report => &mut self.report,
            Signal::EvidenceKind => &mut self.evidence_kind,
            Signal::GateReference => &mut self.gate_reference,
            Signal::Traceability => &mut self.traceability,
        };
        *slot = value;
    }

    /// Active signals in canonical order.
    pub fn active(&self) -> impl Iterator<Item = Signal> + '_ {
        Signal::all().iter().copied().filter(|s| self.get(*s))
    }

    /// Sum of active signal weights, capped at 100.
    pub fn confidence(&self) -> u32 {
        self.active()
            .map(|s| s.weight())
            .sum::<u32>()
            .min(constants::MAX_CONFIDENCE)
    }

    /// `ent,op,test` style label; `-` when nothing is active.
    pub fn abbreviations(&self) -> String {
        let labels: Vec<&str> = self.active().map(|s| s.abbrev()).collect();
        if labels.is_empty() {
            "-".to_string()
        } else {
            labels.join(",")
        }
    }
}
