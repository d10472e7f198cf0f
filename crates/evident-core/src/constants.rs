//! Shared constants for the Evident scanner.

/// Evident version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Format tag written into every ledger.
pub const LEDGER_FORMAT_VERSION: &str = "evident-ledger/1";

/// Default registry document location (relative to the working directory).
pub const DEFAULT_REGISTRY_PATH: &str = "compliance/registry.ts";

/// Default ledger output location.
pub const DEFAULT_LEDGER_PATH: &str = "compliance/evidence-ledger.json";

/// Default config file name.
pub const DEFAULT_CONFIG_FILE: &str = "evident.toml";

// ---- Scoring ----

/// Confidence at or above which a requirement is `covered`.
pub const DEFAULT_COVERED_THRESHOLD: u32 = 60;

/// Confidence at or above which a requirement is `partial`.
pub const DEFAULT_PARTIAL_THRESHOLD: u32 = 30;

/// Upper bound for confidence.
pub const MAX_CONFIDENCE: u32 = 100;

pub const WEIGHT_ENTITY: u32 = 20;
pub const WEIGHT_OPERATION: u32 = 20;
pub const WEIGHT_TEST: u32 = 20;
pub const WEIGHT_REPORT: u32 = 10;
pub const WEIGHT_EVIDENCE_KIND: u32 = 10;
pub const WEIGHT_GATE_REFERENCE: u32 = 10;
pub const WEIGHT_TRACEABILITY: u32 = 10;

// ---- Traceability window ----

/// Lines after an ID occurrence searched for an exported declaration.
pub const DEFAULT_TRACE_LOOKAHEAD: usize = 5;

/// Lines before an ID occurrence searched for an exported declaration.
pub const DEFAULT_TRACE_LOOKBEHIND: usize = 2;

/// Keywords that open an exported declaration.
pub const DEFAULT_EXPORT_KEYWORDS: &[&str] = &["export", "pub", "public"];

// ---- Gates ----

/// Minimum mean ledger confidence before G3 warns.
pub const DEFAULT_CONFIDENCE_BASELINE: f64 = 25.0;

/// Requirements at or above this weight must not be `missing` (G2).
pub const DEFAULT_HEAVY_WEIGHT: u32 = 4;

// ---- Scanning ----

/// Default root directories scanned for evidence.
pub const DEFAULT_ROOTS: &[&str] = &["src", "server", "shared", "scripts", "tools", "tests"];

/// Default file extension allow-list.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "ts", "tsx", "js", "jsx", "mjs", "cjs", "rs", "py", "go", "java", "kt", "cs", "rb", "sh",
    "yml", "yaml",
];

/// Directory names never descended into.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "dist",
    "build",
    "out",
    "target",
    "coverage",
    ".git",
    ".next",
    ".turbo",
    ".cache",
    "vendor",
    "__pycache__",
];

/// Path fragments marking a file as test code.
pub const DEFAULT_TEST_MARKERS: &[&str] = &[
    "/tests/",
    "/test/",
    "/__tests__/",
    "/e2e/",
    ".test.",
    ".spec.",
    "_test.",
    "_spec.",
];

/// Path fragments marking a file as tooling or automation.
pub const DEFAULT_TOOLING_MARKERS: &[&str] = &[
    "/scripts/",
    "/tools/",
    "/tooling/",
    "/automation/",
    "/.github/",
    "/ci/",
];

/// Files above this size are not indexed (bytes).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 2 * 1024 * 1024;

/// Maximum number of file bodies held by the content cache.
pub const DEFAULT_CACHE_CAPACITY: u64 = 50_000;
