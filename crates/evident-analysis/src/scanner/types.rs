//! Scanner data types: CorpusOptions, CorpusFile, ScanStats.

use std::path::PathBuf;

use evident_core::config::ScanConfig;
use evident_core::types::collections::FxHashSet;
use serde::{Deserialize, Serialize};

/// Resolved scanner settings.
#[derive(Debug, Clone)]
pub struct CorpusOptions {
    pub roots: Vec<PathBuf>,
    /// Lowercased extensions without the leading dot.
    pub extensions: FxHashSet<String>,
    pub exclude_dirs: FxHashSet<String>,
    pub test_markers: Vec<String>,
    pub tooling_markers: Vec<String>,
    pub max_file_size: u64,
    pub cache_capacity: u64,
}

impl From<&ScanConfig> for CorpusOptions {
    fn from(config: &ScanConfig) -> Self {
        Self {
            roots: config.effective_roots(),
            extensions: config
                .effective_extensions()
                .into_iter()
                .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
            exclude_dirs: config.effective_exclude_dirs().into_iter().collect(),
            test_markers: config.effective_test_markers(),
            tooling_markers: config.effective_tooling_markers(),
            max_file_size: config.effective_max_file_size(),
            cache_capacity: config.effective_cache_capacity(),
        }
    }
}

impl Default for CorpusOptions {
    fn default() -> Self {
        Self::from(&ScanConfig::default())
    }
}

impl CorpusOptions {
    /// Defaults with explicit roots.
    pub fn with_roots(roots: Vec<PathBuf>) -> Self {
        Self {
            roots,
            ..Self::default()
        }
    }
}

/// One indexed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusFile {
    /// Path as reachable from the working directory.
    pub path: PathBuf,
    /// `/`-separated path starting at the root's own name, used for marker
    /// matching and display (e.g. `/tests/billing.test.ts`).
    pub key: String,
    pub is_test: bool,
    pub is_tooling: bool,
}

/// Aggregate statistics for one discovery pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanStats {
    pub total_files: usize,
    pub test_files: usize,
    pub tooling_files: usize,
    pub roots_scanned: usize,
    pub roots_missing: usize,
    pub files_skipped_large: usize,
    pub walk_errors: usize,
    pub discovery_ms: u64,
}
