//! Corpus discovery against on-disk fixtures.

use std::fs;
use std::path::{Path, PathBuf};

use evident_analysis::scanner::{Corpus, CorpusOptions, FileScope};
use tempfile::TempDir;

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

fn fixture() -> (TempDir, Vec<PathBuf>) {
    let dir = TempDir::new().unwrap();
    let base = dir.path();
    write(base, "src/billing/invoice.ts", "export class Invoice {}");
    write(base, "src/billing/invoice.spec.ts", "describe('invoice')");
    write(base, "src/node_modules/lib/index.ts", "export const vendored = 1;");
    write(base, "src/assets/logo.png", "binary");
    write(base, "src/README.md", "# docs");
    write(base, "tests/billing.ts", "REQ-BIL-001");
    write(base, "scripts/check-gates.sh", "run ci-compliance");
    let roots = vec![
        base.join("src"),
        base.join("tests"),
        base.join("scripts"),
        base.join("missing"),
    ];
    (dir, roots)
}

#[test]
fn test_discovers_allowed_extensions_only() {
    let (_dir, roots) = fixture();
    let corpus = Corpus::discover(&CorpusOptions::with_roots(roots));
    let keys: Vec<&str> = corpus.files().iter().map(|f| f.key.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "/scripts/check-gates.sh",
            "/src/billing/invoice.spec.ts",
            "/src/billing/invoice.ts",
            "/tests/billing.ts",
        ]
    );
}

#[test]
fn test_classification() {
    let (_dir, roots) = fixture();
    let corpus = Corpus::discover(&CorpusOptions::with_roots(roots));
    let by_key = |key: &str| corpus.files().iter().find(|f| f.key == key).unwrap();

    assert!(by_key("/src/billing/invoice.spec.ts").is_test);
    assert!(by_key("/tests/billing.ts").is_test);
    assert!(!by_key("/src/billing/invoice.ts").is_test);
    assert!(by_key("/scripts/check-gates.sh").is_tooling);
    assert!(!by_key("/scripts/check-gates.sh").is_test);
}

#[test]
fn test_stats_count_missing_roots() {
    let (_dir, roots) = fixture();
    let corpus = Corpus::discover(&CorpusOptions::with_roots(roots));
    let stats = corpus.stats();
    assert_eq!(stats.total_files, 4);
    assert_eq!(stats.test_files, 2);
    assert_eq!(stats.tooling_files, 1);
    assert_eq!(stats.roots_scanned, 3);
    assert_eq!(stats.roots_missing, 1);
}

#[test]
fn test_overlapping_roots_do_not_duplicate() {
    let (dir, _) = fixture();
    let src = dir.path().join("src");
    let corpus = Corpus::discover(&CorpusOptions::with_roots(vec![src.clone(), src]));
    assert_eq!(corpus.len(), 2);
}

#[test]
fn test_oversized_files_are_skipped() {
    let (dir, _) = fixture();
    let mut options = CorpusOptions::with_roots(vec![dir.path().join("src")]);
    options.max_file_size = 10;
    let corpus = Corpus::discover(&options);
    // "export class Invoice {}" exceeds 10 bytes; "describe('invoice')" too.
    assert!(corpus.is_empty());
    assert_eq!(corpus.stats().files_skipped_large, 2);
}

#[test]
fn test_scoped_lookup_and_cache() {
    let (_dir, roots) = fixture();
    let corpus = Corpus::discover(&CorpusOptions::with_roots(roots));
    corpus.preload();
    let loads = corpus.cache().loads();
    assert_eq!(loads, 4);

    let hit = corpus.find(FileScope::Test, |body| body.contains("REQ-BIL-001"));
    assert_eq!(hit.map(|f| f.key.as_str()), Some("/tests/billing.ts"));
    assert!(corpus
        .find(FileScope::NonTest, |body| body.contains("REQ-BIL-001"))
        .is_none());
    assert!(corpus
        .find(FileScope::ToolingOrTest, |body| body.contains("ci-compliance"))
        .is_some());
    assert_eq!(corpus.cache().loads(), loads, "lookups hit the cache");
}

#[test]
fn test_no_roots_yields_empty_corpus() {
    let corpus = Corpus::discover(&CorpusOptions::with_roots(Vec::new()));
    assert!(corpus.is_empty());
    assert_eq!(corpus.stats().roots_scanned, 0);
}
