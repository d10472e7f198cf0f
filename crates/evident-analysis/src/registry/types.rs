//! Registry data model.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Requirement ID shape: `REQ-<CATEGORY>-<NNN>`.
pub const REQUIREMENT_ID_PATTERN: &str = r"REQ-[A-Z][A-Z0-9]*-\d{3,}";

static REQUIREMENT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{REQUIREMENT_ID_PATTERN}$")).expect("valid id regex"));

/// True if `id` has the `REQ-<CATEGORY>-<NNN>` shape.
pub fn is_valid_requirement_id(id: &str) -> bool {
    REQUIREMENT_ID_RE.is_match(id)
}

/// Severity tier. `S0` is the most critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum Severity {
    S0,
    S1,
    S2,
    #[default]
    S3,
}

impl Severity {
    /// The most critical tier.
    pub const HIGHEST: Severity = Severity::S0;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S0 => "S0",
            Self::S1 => "S1",
            Self::S2 => "S2",
            Self::S3 => "S3",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "S0" => Some(Self::S0),
            "S1" => Some(Self::S1),
            "S2" => Some(Self::S2),
            "S3" => Some(Self::S3),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One compliance obligation and the artifacts expected to satisfy it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub id: String,
    pub title: String,
    pub severity: Severity,
    /// Relative importance in aggregate scoring; always >= 1.
    pub weight: u32,
    pub entities: Vec<String>,
    pub operations: Vec<String>,
    pub tests: Vec<String>,
    pub reports: Vec<String>,
    pub evidence_kinds: Vec<String>,
    pub gates: Vec<String>,
}

impl Requirement {
    /// A requirement with the loader's defaults: severity S3, weight 1, no
    /// artifacts.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            severity: Severity::default(),
            weight: 1,
            entities: Vec::new(),
            operations: Vec::new(),
            tests: Vec::new(),
            reports: Vec::new(),
            evidence_kinds: Vec::new(),
            gates: Vec::new(),
        }
    }
}

/// A named, ordered group of requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub key: String,
    pub title: String,
    pub requirements: Vec<Requirement>,
}

/// The parsed registry. Read-only after load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    pub sections: Vec<Section>,
    /// Gate names each expected to be referenced by some requirement.
    pub global_gates: Vec<String>,
}

impl Registry {
    /// Every requirement, in section order.
    pub fn requirements(&self) -> impl Iterator<Item = &Requirement> {
        self.sections.iter().flat_map(|s| s.requirements.iter())
    }

    pub fn requirement_count(&self) -> usize {
        self.sections.iter().map(|s| s.requirements.len()).sum()
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}
