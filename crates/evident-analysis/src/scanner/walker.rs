//! Recursive file discovery using the `ignore` walker.
//!
//! Standard ignore filters (gitignore, hidden files) are disabled so the
//! file set depends only on the configured roots, extensions and excluded
//! directory names.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use evident_core::errors::{EvidentErrorCode, ScanError};
use evident_core::types::collections::FxHashSet;
use ignore::WalkBuilder;

use super::types::{CorpusFile, CorpusOptions, ScanStats};

/// Walk every root and return the matching files sorted by key.
///
/// A root that does not exist is counted and skipped.
pub fn discover(options: &CorpusOptions) -> (Vec<CorpusFile>, ScanStats) {
    let start = Instant::now();
    let mut stats = ScanStats::default();
    let mut files = Vec::new();
    let mut seen: FxHashSet<PathBuf> = FxHashSet::default();
    let excluded = Arc::new(options.exclude_dirs.clone());

    for root in &options.roots {
        if !root.is_dir() {
            let err = ScanError::RootNotFound { path: root.clone() };
            tracing::debug!(error = %err.coded_string(), "skipping root");
            stats.roots_missing += 1;
            continue;
        }
        stats.roots_scanned += 1;

        let excluded = Arc::clone(&excluded);
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                !(is_dir
                    && entry.depth() > 0
                    && excluded.contains(&*entry.file_name().to_string_lossy()))
            });

        for result in builder.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!(root = %root.display(), error = %e, "walk error");
                    stats.walk_errors += 1;
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let path = entry.path();
            if !has_allowed_extension(path, options) {
                continue;
            }
            if let Ok(meta) = entry.metadata() {
                if meta.len() > options.max_file_size {
                    let err = ScanError::MaxFileSizeExceeded {
                        path: path.to_path_buf(),
                        size: meta.len(),
                        max: options.max_file_size,
                    };
                    tracing::debug!(error = %err.coded_string(), "skipping file");
                    stats.files_skipped_large += 1;
                    continue;
                }
            }
            if seen.insert(path.to_path_buf()) {
                files.push(classify(root, path, options));
            }
        }
    }

    files.sort_by(|a, b| a.key.cmp(&b.key).then_with(|| a.path.cmp(&b.path)));

    stats.total_files = files.len();
    stats.test_files = files.iter().filter(|f| f.is_test).count();
    stats.tooling_files = files.iter().filter(|f| f.is_tooling).count();
    stats.discovery_ms = start.elapsed().as_millis() as u64;
    (files, stats)
}

fn has_allowed_extension(path: &Path, options: &CorpusOptions) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| options.extensions.contains(&e.to_ascii_lowercase()))
}

/// Build the marker key `/<root-name>/<relative path>` and classify it.
pub(crate) fn classify(root: &Path, path: &Path, options: &CorpusOptions) -> CorpusFile {
    let key = marker_key(root, path);
    let is_test = options.test_markers.iter().any(|m| key.contains(m.as_str()));
    let is_tooling = options.tooling_markers.iter().any(|m| key.contains(m.as_str()));
    CorpusFile {
        path: path.to_path_buf(),
        key,
        is_test,
        is_tooling,
    }
}

fn marker_key(root: &Path, path: &Path) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(name) = root.file_name() {
        parts.push(name.to_string_lossy().into_owned());
    }
    let relative = path.strip_prefix(root).unwrap_or(path);
    for component in relative.components() {
        if let Component::Normal(part) = component {
            parts.push(part.to_string_lossy().into_owned());
        }
    }
    format!("/{}", parts.join("/"))
}
