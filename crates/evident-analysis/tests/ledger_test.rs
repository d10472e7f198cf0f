//! Ledger assembly, ordering, idempotence and persistence.

use std::fs;
use std::path::Path;

use chrono::{TimeZone, Utc};
use evident_analysis::evidence::EvidenceScorer;
use evident_analysis::ledger::writer::to_json;
use evident_analysis::ledger::{write_ledger, Ledger, LedgerBuilder};
use evident_analysis::registry::RegistryLoader;
use evident_analysis::scanner::{Corpus, CorpusOptions};
use evident_core::constants::LEDGER_FORMAT_VERSION;
use evident_core::errors::LedgerError;
use tempfile::TempDir;

const REGISTRY: &str = r#"
export const registry = [
  { section: "billing", title: "Billing", requirements: [
    { id: "REQ-BIL-002", title: "Refunds", entities: ["Refund"] },
    { id: "REQ-BIL-001", title: "Invoices", entities: ["Invoice"], weight: 3 },
  ]},
  { section: "hr", title: "People", requirements: [
    { id: "REQ-HR-001", title: "Leave", entities: ["LeaveRequest"] },
  ]},
];
"#;

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

fn build(dir: &TempDir) -> Ledger {
    write(dir.path(), "src/invoice.ts", "// REQ-BIL-001\nexport class Invoice {}\n");
    write(dir.path(), "tests/invoice.test.ts", "REQ-BIL-001");
    let corpus = Corpus::discover(&CorpusOptions::with_roots(vec![
        dir.path().join("src"),
        dir.path().join("tests"),
    ]));
    let registry = RegistryLoader::parse(REGISTRY);
    let scorer = EvidenceScorer::default();
    LedgerBuilder::new(&scorer)
        .generated_at(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap())
        .build(&registry, &corpus)
}

#[test]
fn test_registry_order_is_preserved() {
    let dir = TempDir::new().unwrap();
    let ledger = build(&dir);
    let keys: Vec<&str> = ledger.sections.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, vec!["billing", "hr"]);
    let ids: Vec<&str> = ledger.requirements().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["REQ-BIL-002", "REQ-BIL-001", "REQ-HR-001"]);
}

#[test]
fn test_scores_and_summary() {
    let dir = TempDir::new().unwrap();
    let ledger = build(&dir);
    assert_eq!(ledger.format_version, LEDGER_FORMAT_VERSION);
    assert_eq!(ledger.thresholds.covered, 60);
    assert_eq!(ledger.thresholds.partial, 30);

    // entity + test + traceability
    let invoices = ledger.requirements().find(|r| r.id == "REQ-BIL-001").unwrap();
    assert_eq!(invoices.confidence, 50);
    assert_eq!(invoices.signals.abbreviations(), "ent,test,trace");

    let s = &ledger.summary;
    assert_eq!(s.total, 3);
    assert_eq!((s.covered, s.partial, s.missing), (0, 1, 2));
    assert_eq!(s.average_confidence, 16.7);
    assert_eq!(s.coverage_percent, 0.0);
    // 50*3 / (5 weights * 100)
    assert_eq!(s.weighted_score, 30.0);

    let billing = &ledger.sections[0].summary;
    assert_eq!(billing.total, 2);
    assert_eq!(billing.average_confidence, 25.0);
    assert_eq!(ledger.sections[1].summary.average_confidence, 0.0);
}

#[test]
fn test_statistics_are_idempotent() {
    let dir = TempDir::new().unwrap();
    let first = build(&dir);
    let second = build(&dir);
    assert_eq!(first, second);
    assert_eq!(to_json(&first).unwrap(), to_json(&second).unwrap());
}

#[test]
fn test_write_creates_parents_and_overwrites() {
    let dir = TempDir::new().unwrap();
    let ledger = build(&dir);
    let path = dir.path().join("compliance/out/evidence-ledger.json");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "stale").unwrap();

    write_ledger(&path, &ledger).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.ends_with('\n'));
    let parsed: Ledger = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, ledger);

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["format_version"], LEDGER_FORMAT_VERSION);
    assert_eq!(value["sections"][0]["requirements"][1]["status"], "partial");
}

#[test]
fn test_unwritable_path_is_an_error() {
    let dir = TempDir::new().unwrap();
    let ledger = build(&dir);
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "a file, not a directory").unwrap();

    let err = write_ledger(&blocker.join("ledger.json"), &ledger).unwrap_err();
    assert!(matches!(err, LedgerError::Write { .. }));
}

#[test]
fn test_empty_registry_yields_zero_summary() {
    let dir = TempDir::new().unwrap();
    let corpus = Corpus::discover(&CorpusOptions::with_roots(vec![dir.path().to_path_buf()]));
    let scorer = EvidenceScorer::default();
    let ledger = LedgerBuilder::new(&scorer).build(&RegistryLoader::parse(""), &corpus);
    assert!(ledger.sections.is_empty());
    assert_eq!(ledger.summary.total, 0);
    assert_eq!(ledger.summary.average_confidence, 0.0);
    assert_eq!(ledger.summary.weighted_score, 0.0);
}
