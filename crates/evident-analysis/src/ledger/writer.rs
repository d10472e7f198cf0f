//! Ledger persistence. The previous ledger, if any, is overwritten.

use std::path::Path;

use evident_core::errors::LedgerError;

use super::types::Ledger;

/// Pretty-printed JSON with a trailing newline.
pub fn to_json(ledger: &Ledger) -> Result<String, LedgerError> {
    let mut json =
        serde_json::to_string_pretty(ledger).map_err(|e| LedgerError::Serialize(e.to_string()))?;
    json.push('\n');
    Ok(json)
}

/// Write `ledger` to `path`, creating parent directories as needed.
pub fn write_ledger(path: &Path, ledger: &Ledger) -> Result<(), LedgerError> {
    let json = to_json(ledger)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| LedgerError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, json).map_err(|source| LedgerError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "ledger written");
    Ok(())
}
