//! File-content cache bound to one run.
//!
//! Uses `moka::sync::Cache::get_with`, so concurrent first reads of the same
//! path load it once and every reader sees the same body.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use evident_core::errors::{EvidentErrorCode, ScanError};
use moka::sync::Cache;

/// Content cache with load/hit counters.
pub struct ContentCache {
    cache: Cache<PathBuf, Arc<str>>,
    loads: AtomicU64,
    lookups: AtomicU64,
}

impl ContentCache {
    pub fn new(capacity: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(capacity).build(),
            loads: AtomicU64::new(0),
            lookups: AtomicU64::new(0),
        }
    }

    /// File body, read from disk on first access. Unreadable files yield an
    /// empty body: no evidence, not an error.
    pub fn get(&self, path: &Path) -> Arc<str> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.cache.get_with(path.to_path_buf(), || {
            self.loads.fetch_add(1, Ordering::Relaxed);
            match read_lossy(path) {
                Ok(body) => Arc::from(body),
                Err(e) => {
                    tracing::debug!(error = %e.coded_string(), "treating unreadable file as empty");
                    Arc::from("")
                }
            }
        })
    }

    /// Number of disk reads performed.
    pub fn loads(&self) -> u64 {
        self.loads.load(Ordering::Relaxed)
    }

    /// Number of `get` calls served.
    pub fn lookups(&self) -> u64 {
        self.lookups.load(Ordering::Relaxed)
    }
}

fn read_lossy(path: &Path) -> Result<String, ScanError> {
    let bytes = std::fs::read(path).map_err(|source| ScanError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}
