//! Tolerant registry extraction.
//!
//! The document is never parsed as a whole. Instead the loader locates
//! markers (section keys, requirement IDs, the global gate list), slices the
//! text between consecutive markers into windows, and pulls each field out
//! of its window with a keyed pattern plus the literal scanner. Fields that
//! cannot be found take their defaults.

use std::path::Path;
use std::sync::LazyLock;

use evident_core::errors::RegistryError;
use regex::Regex;

use super::literal::{read_list, read_quoted};
use super::types::{Registry, Requirement, Section, Severity, REQUIREMENT_ID_PATTERN};

/// Key of the implicit section holding requirements that precede every
/// section marker.
pub const UNSECTIONED_KEY: &str = "unsectioned";

/// Optional TypeScript type annotation between a key and its value, e.g.
/// `GLOBAL_GATES: string[] = [`.
const TYPE_ANNOTATION: &str = r"(?:\s*:\s*[\w<>\[\]]+)?";

static SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\b(?:section|sectionKey|section_key)\s*[:=]\s*["'`]([^"'`\n]+)["'`]"#)
        .expect("valid section regex")
});

static REQUIREMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r#"\bid\s*[:=]\s*["'`]({REQUIREMENT_ID_PATTERN})["'`]"#))
        .expect("valid requirement regex")
});

static GLOBAL_GATES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b(?:globalGates|global_gates|GLOBAL_GATES)\b{TYPE_ANNOTATION}\s*[:=]\s*\["
    ))
    .expect("valid global gates regex")
});

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\btitle\s*[:=]\s*").expect("valid title regex"));

static SEVERITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bseverity\s*[:=]\s*(?:[A-Za-z_]+\.)?["'`]?([Ss][0-3])\b"#)
        .expect("valid severity regex")
});

static WEIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bweight\s*[:=]\s*(\d+)").expect("valid weight regex"));

/// A list-valued requirement field and the keys it may appear under.
struct ListField {
    pattern: Regex,
}

impl ListField {
    fn new(aliases: &[&str]) -> Self {
        let pattern = format!(
            r"\b(?:{})\b{TYPE_ANNOTATION}\s*[:=]\s*\[",
            aliases.join("|")
        );
        Self {
            pattern: Regex::new(&pattern).expect("valid list field regex"),
        }
    }

    /// Tokens of the first matching list in `window`.
    fn extract(&self, window: &str) -> Vec<String> {
        match self.pattern.find(window) {
            // The match ends just past `[`; hand the scanner the bracket.
            Some(m) => read_list(&window[m.end() - 1..]),
            None => Vec::new(),
        }
    }
}

static ENTITIES: LazyLock<ListField> =
    LazyLock::new(|| ListField::new(&["entities", "requiredEntities", "required_entities"]));
static OPERATIONS: LazyLock<ListField> =
    LazyLock::new(|| ListField::new(&["operations", "requiredOperations", "required_operations"]));
static TESTS: LazyLock<ListField> =
    LazyLock::new(|| ListField::new(&["tests", "requiredTests", "required_tests"]));
static REPORTS: LazyLock<ListField> =
    LazyLock::new(|| ListField::new(&["reports", "requiredReports", "required_reports"]));
static EVIDENCE: LazyLock<ListField> = LazyLock::new(|| {
    ListField::new(&["evidence", "evidenceKinds", "evidence_kinds", "requiredEvidence"])
});
static GATES: LazyLock<ListField> = LazyLock::new(|| ListField::new(&["gates"]));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkerKind {
    Section,
    Requirement,
    GlobalGates,
}

#[derive(Debug, Clone)]
struct Marker<'a> {
    kind: MarkerKind,
    /// Byte offset where the marker's window starts.
    start: usize,
    /// Section key or requirement ID.
    value: &'a str,
}

/// Registry document parser.
pub struct RegistryLoader;

impl RegistryLoader {
    /// Read and parse the registry at `path`. An unreadable document is the
    /// only failure.
    pub fn load(path: &Path) -> Result<Registry, RegistryError> {
        let text = std::fs::read_to_string(path).map_err(|source| RegistryError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::parse(&text);
        tracing::info!(
            path = %path.display(),
            sections = registry.section_count(),
            requirements = registry.requirement_count(),
            global_gates = registry.global_gates.len(),
            "registry loaded"
        );
        Ok(registry)
    }

    /// Extract sections, requirements and global gates from `text`.
    pub fn parse(text: &str) -> Registry {
        let markers = collect_markers(text);

        // The match ends just past `[`; hand the scanner the bracket.
        let global_gates = GLOBAL_GATES_RE
            .find(text)
            .map(|m| read_list(&text[m.end() - 1..]))
            .unwrap_or_default();

        let mut sections: Vec<Section> = Vec::new();
        for (i, marker) in markers.iter().enumerate() {
            let end = markers.get(i + 1).map_or(text.len(), |next| next.start);
            let window = &text[marker.start..end];
            match marker.kind {
                MarkerKind::Section => {
                    sections.push(Section {
                        key: marker.value.to_string(),
                        title: extract_title(window).unwrap_or_else(|| marker.value.to_string()),
                        requirements: Vec::new(),
                    });
                }
                MarkerKind::Requirement => {
                    let requirement = extract_requirement(marker.value, window);
                    if sections.is_empty() {
                        tracing::debug!(id = %requirement.id, "requirement precedes every section marker");
                        sections.push(Section {
                            key: UNSECTIONED_KEY.to_string(),
                            title: UNSECTIONED_KEY.to_string(),
                            requirements: Vec::new(),
                        });
                    }
                    if let Some(section) = sections.last_mut() {
                        section.requirements.push(requirement);
                    }
                }
                MarkerKind::GlobalGates => {}
            }
        }

        Registry {
            sections,
            global_gates,
        }
    }
}

fn collect_markers(text: &str) -> Vec<Marker<'_>> {
    let mut markers = Vec::new();
    for caps in REQUIREMENT_RE.captures_iter(text) {
        if let (Some(all), Some(id)) = (caps.get(0), caps.get(1)) {
            markers.push(Marker {
                kind: MarkerKind::Requirement,
                start: all.start(),
                value: id.as_str(),
            });
        }
    }
    let requirement_starts: Vec<usize> = markers.iter().map(|m| m.start).collect();
    for caps in SECTION_RE.captures_iter(text) {
        if let (Some(all), Some(key)) = (caps.get(0), caps.get(1)) {
            // A `section:` back-reference inside a requirement object is a
            // field, not a boundary.
            let open_requirement = requirement_starts
                .iter()
                .rev()
                .find(|&&start| start < all.start())
                .is_some_and(|&start| !object_closes(&text[start..all.start()]));
            if open_requirement {
                continue;
            }
            markers.push(Marker {
                kind: MarkerKind::Section,
                start: all.start(),
                value: key.as_str(),
            });
        }
    }
    // The global list only bounds the window of whatever precedes it.
    if let Some(m) = GLOBAL_GATES_RE.find(text) {
        markers.push(Marker {
            kind: MarkerKind::GlobalGates,
            start: m.start(),
            value: "",
        });
    }
    markers.sort_by_key(|m| m.start);
    markers
}

/// True when `span`, read from inside an object, closes that object.
/// Braces inside quoted strings and `//` comments are ignored.
fn object_closes(span: &str) -> bool {
    let mut depth = 0i32;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut chars = span.chars().peekable();
    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' | '`' => quote = Some(c),
            '/' if chars.peek() == Some(&'/') => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        break;
                    }
                }
            }
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth < 0 {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}

fn extract_title(window: &str) -> Option<String> {
    let m = TITLE_RE.find(window)?;
    read_quoted(&window[m.end()..]).filter(|t| !t.trim().is_empty())
}

fn extract_requirement(id: &str, window: &str) -> Requirement {
    let severity = SEVERITY_RE
        .captures(window)
        .and_then(|c| c.get(1))
        .and_then(|m| Severity::parse(m.as_str()))
        .unwrap_or_default();
    let weight = WEIGHT_RE
        .captures(window)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(1)
        .max(1);

    Requirement {
        id: id.to_string(),
        title: extract_title(window).unwrap_or_default(),
        severity,
        weight,
        entities: ENTITIES.extract(window),
        operations: OPERATIONS.extract(window),
        tests: TESTS.extract(window),
        reports: REPORTS.extract(window),
        evidence_kinds: EVIDENCE.extract(window),
        gates: GATES.extract(window),
    }
}
