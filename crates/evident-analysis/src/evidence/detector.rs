//! Signal detection strategies.

use std::collections::BTreeMap;

use crate::naming::VariantMatcher;
use crate::registry::Requirement;
use crate::scanner::{Corpus, CorpusFile, FileScope};

use super::signals::{Signal, SignalSet};
use super::trace::TraceWindow;

/// Signals plus short human-readable excerpts keyed by signal name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Detection {
    pub signals: SignalSet,
    pub evidence: BTreeMap<String, String>,
}

impl Detection {
    fn record(&mut self, signal: Signal, outcome: SignalOutcome) {
        self.signals.set(signal, outcome.active);
        if let Some(note) = outcome.note {
            self.evidence.insert(signal.as_str().to_string(), note);
        }
    }
}

/// Computes the signal set for one requirement against a corpus.
///
/// Implementations must be pure with respect to the corpus: absence of
/// evidence is a `false` signal, never an error.
pub trait SignalDetector: Send + Sync {
    fn detect(&self, requirement: &Requirement, corpus: &Corpus) -> Detection;
}

/// Result of one signal evaluation.
#[derive(Debug, Clone, Default)]
pub struct SignalOutcome {
    pub active: bool,
    pub note: Option<String>,
}

impl SignalOutcome {
    fn inactive() -> Self {
        Self::default()
    }
}

/// Text-search detector: naming variants, path classification and a
/// traceability line window.
#[derive(Debug, Clone, Default)]
pub struct HeuristicDetector {
    trace: TraceWindow,
}

impl HeuristicDetector {
    pub fn new(trace: TraceWindow) -> Self {
        Self { trace }
    }

    /// At least half (rounded up) of `names` have a variant match in `scope`.
    fn half_or_more(
        &self,
        corpus: &Corpus,
        names: &[String],
        scope: FileScope,
        build: fn(&str) -> VariantMatcher,
        noun: &str,
    ) -> SignalOutcome {
        let names: Vec<&String> = names.iter().filter(|n| !n.trim().is_empty()).collect();
        if names.is_empty() {
            return SignalOutcome::inactive();
        }
        let matched: Vec<&str> = names
            .iter()
            .filter(|name| {
                let matcher = build(name);
                corpus.find(scope, |body| matcher.is_match(body)).is_some()
            })
            .map(|name| name.as_str())
            .collect();
        let required = names.len().div_ceil(2);
        SignalOutcome {
            active: matched.len() >= required,
            note: Some(format!(
                "{}/{} {noun} matched: {}",
                matched.len(),
                names.len(),
                if matched.is_empty() { "-".to_string() } else { matched.join(", ") }
            )),
        }
    }

    pub fn entity_signal(&self, req: &Requirement, corpus: &Corpus) -> SignalOutcome {
        self.half_or_more(corpus, &req.entities, FileScope::NonTest, VariantMatcher::entity, "entities")
    }

    pub fn operation_signal(&self, req: &Requirement, corpus: &Corpus) -> SignalOutcome {
        self.half_or_more(corpus, &req.operations, FileScope::NonTest, VariantMatcher::operation, "operations")
    }

    pub fn report_signal(&self, req: &Requirement, corpus: &Corpus) -> SignalOutcome {
        self.half_or_more(corpus, &req.reports, FileScope::All, VariantMatcher::operation, "reports")
    }

    /// A test file mentions the requirement ID or a required test by name.
    pub fn test_signal(&self, req: &Requirement, corpus: &Corpus) -> SignalOutcome {
        let mut needles = vec![req.id.as_str()];
        needles.extend(req.tests.iter().map(String::as_str).filter(|t| !t.trim().is_empty()));
        for needle in needles {
            if let Some(file) = corpus.find(FileScope::Test, |body| body.contains(needle)) {
                return SignalOutcome {
                    active: true,
                    note: Some(format!("'{needle}' found in {}", file.key)),
                };
            }
        }
        SignalOutcome::inactive()
    }

    /// Any evidence keyword anywhere in the corpus.
    pub fn evidence_kind_signal(&self, req: &Requirement, corpus: &Corpus) -> SignalOutcome {
        for kind in req.evidence_kinds.iter().filter(|k| !k.trim().is_empty()) {
            let matcher = VariantMatcher::entity(kind);
            if let Some(file) = corpus.find(FileScope::All, |body| matcher.is_match(body)) {
                return SignalOutcome {
                    active: true,
                    note: Some(format!("evidence '{kind}' found in {}", file.key)),
                };
            }
        }
        SignalOutcome::inactive()
    }

    /// A declared gate name appears verbatim in tooling or test code.
    pub fn gate_reference_signal(&self, req: &Requirement, corpus: &Corpus) -> SignalOutcome {
        for gate in req.gates.iter().filter(|g| !g.trim().is_empty()) {
            let matcher = VariantMatcher::literal(gate);
            if let Some(file) = corpus.find(FileScope::ToolingOrTest, |body| matcher.is_match(body)) {
                return SignalOutcome {
                    active: true,
                    note: Some(format!("gate '{}' referenced in {}", matcher.name(), file.key)),
                };
            }
        }
        SignalOutcome::inactive()
    }

    /// The ID is attached to an exported symbol in non-test code.
    pub fn traceability_signal(&self, req: &Requirement, corpus: &Corpus) -> SignalOutcome {
        let traced: Option<(&CorpusFile, usize)> = corpus.scoped(FileScope::NonTest).find_map(|file| {
            let body = corpus.content(file);
            self.trace
                .find_traced_line(&body, &req.id)
                .map(|line| (file, line))
        });
        match traced {
            Some((file, line)) => SignalOutcome {
                active: true,
                note: Some(format!("traced to export at {}:{line}", file.key)),
            },
            None => SignalOutcome::inactive(),
        }
    }
}

impl SignalDetector for HeuristicDetector {
    fn detect(&self, requirement: &Requirement, corpus: &Corpus) -> Detection {
        let mut detection = Detection::default();
        detection.record(Signal::Entity, self.entity_signal(requirement, corpus));
        detection.record(Signal::Operation, self.operation_signal(requirement, corpus));
        detection.record(Signal::Test, self.test_signal(requirement, corpus));
        detection.record(Signal::Report, self.report_signal(requirement, corpus));
        detection.record(Signal::EvidenceKind, self.evidence_kind_signal(requirement, corpus));
        detection.record(Signal::GateReference, self.gate_reference_signal(requirement, corpus));
        detection.record(Signal::Traceability, self.traceability_signal(requirement, corpus));
        detection
    }
}
