//! Corpus scanning configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for corpus discovery.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Root directories to walk. Missing roots are skipped.
    pub roots: Option<Vec<PathBuf>>,
    /// File extensions (without the dot) to index.
    pub extensions: Option<Vec<String>>,
    /// Directory names never descended into.
    pub exclude_dirs: Option<Vec<String>>,
    /// Path fragments that designate test code.
    pub test_markers: Option<Vec<String>>,
    /// Path fragments that designate tooling/automation code.
    pub tooling_markers: Option<Vec<String>>,
    /// Files larger than this are skipped. Default: 2MB.
    pub max_file_size: Option<u64>,
    /// Content cache capacity in files. Default: 50,000.
    pub cache_capacity: Option<u64>,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

impl ScanConfig {
    pub fn effective_roots(&self) -> Vec<PathBuf> {
        self.roots.clone().unwrap_or_else(|| {
            constants::DEFAULT_ROOTS.iter().map(PathBuf::from).collect()
        })
    }

    pub fn effective_extensions(&self) -> Vec<String> {
        self.extensions
            .clone()
            .unwrap_or_else(|| owned(constants::DEFAULT_EXTENSIONS))
    }

    pub fn effective_exclude_dirs(&self) -> Vec<String> {
        self.exclude_dirs
            .clone()
            .unwrap_or_else(|| owned(constants::DEFAULT_EXCLUDED_DIRS))
    }

    pub fn effective_test_markers(&self) -> Vec<String> {
        self.test_markers
            .clone()
            .unwrap_or_else(|| owned(constants::DEFAULT_TEST_MARKERS))
    }

    pub fn effective_tooling_markers(&self) -> Vec<String> {
        self.tooling_markers
            .clone()
            .unwrap_or_else(|| owned(constants::DEFAULT_TOOLING_MARKERS))
    }

    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(constants::DEFAULT_MAX_FILE_SIZE)
    }

    pub fn effective_cache_capacity(&self) -> u64 {
        self.cache_capacity
            .unwrap_or(constants::DEFAULT_CACHE_CAPACITY)
    }
}
