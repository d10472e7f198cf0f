//! Scanner errors.

use std::path::PathBuf;

use super::error_code::{self, EvidentErrorCode};

/// Errors that can occur while indexing the corpus.
///
/// The scanner downgrades these to "no evidence" and logs them; they are
/// surfaced as values so callers can count or report them.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("IO error scanning {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Root directory not found: {path}")]
    RootNotFound { path: PathBuf },

    #[error("File too large: {path} ({size} bytes, max {max})")]
    MaxFileSizeExceeded { path: PathBuf, size: u64, max: u64 },
}

impl EvidentErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        error_code::SCAN_ERROR
    }
}
