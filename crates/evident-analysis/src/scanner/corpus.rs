//! The indexed corpus: discovered files plus their cached contents.

use std::sync::Arc;

use rayon::prelude::*;

use super::cache::ContentCache;
use super::types::{CorpusFile, CorpusOptions, ScanStats};
use super::walker;

/// Which files a lookup may consider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileScope {
    /// Every indexed file.
    All,
    /// Files not designated as tests.
    NonTest,
    /// Test files only.
    Test,
    /// Tooling/automation files and test files.
    ToolingOrTest,
}

impl FileScope {
    pub fn admits(&self, file: &CorpusFile) -> bool {
        match self {
            Self::All => true,
            Self::NonTest => !file.is_test,
            Self::Test => file.is_test,
            Self::ToolingOrTest => file.is_tooling || file.is_test,
        }
    }
}

/// Files discovered for one run and a content cache scoped to that run.
pub struct Corpus {
    files: Vec<CorpusFile>,
    cache: ContentCache,
    stats: ScanStats,
}

impl Corpus {
    /// Discover files under `options.roots`.
    pub fn discover(options: &CorpusOptions) -> Self {
        let (files, stats) = walker::discover(options);
        tracing::info!(
            files = stats.total_files,
            test_files = stats.test_files,
            tooling_files = stats.tooling_files,
            roots_scanned = stats.roots_scanned,
            roots_missing = stats.roots_missing,
            duration_ms = stats.discovery_ms,
            "corpus discovered"
        );
        Self {
            files,
            cache: ContentCache::new(options.cache_capacity),
            stats,
        }
    }

    /// Build a corpus from an explicit file list.
    pub fn from_files(files: Vec<CorpusFile>, cache_capacity: u64) -> Self {
        let stats = ScanStats {
            total_files: files.len(),
            test_files: files.iter().filter(|f| f.is_test).count(),
            tooling_files: files.iter().filter(|f| f.is_tooling).count(),
            ..ScanStats::default()
        };
        Self {
            files,
            cache: ContentCache::new(cache_capacity),
            stats,
        }
    }

    pub fn files(&self) -> &[CorpusFile] {
        &self.files
    }

    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }

    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Cached body of `file`.
    pub fn content(&self, file: &CorpusFile) -> Arc<str> {
        self.cache.get(&file.path)
    }

    /// Files admitted by `scope`, in discovery order.
    pub fn scoped(&self, scope: FileScope) -> impl Iterator<Item = &CorpusFile> {
        self.files.iter().filter(move |f| scope.admits(f))
    }

    /// First file in `scope` whose body satisfies `pred`.
    pub fn find<F>(&self, scope: FileScope, pred: F) -> Option<&CorpusFile>
    where
        F: Fn(&str) -> bool,
    {
        self.scoped(scope).find(|f| pred(&*self.content(f)))
    }

    /// Read every file into the cache in parallel.
    pub fn preload(&self) {
        self.files.par_iter().for_each(|f| {
            self.cache.get(&f.path);
        });
        tracing::debug!(loads = self.cache.loads(), "corpus preloaded");
    }
}
