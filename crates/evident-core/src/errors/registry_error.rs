//! Registry loading errors.

use std::path::PathBuf;

use super::error_code::{self, EvidentErrorCode};

/// Errors that abort registry loading. Formatting variance inside the
/// document is tolerated; only an unreadable document is an error.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Registry unreadable: {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl EvidentErrorCode for RegistryError {
    fn error_code(&self) -> &'static str {
        error_code::REGISTRY_ERROR
    }
}
