//! History persistence: load/save with atomic writes

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use crate::models::HistoryDocument;

/// Load the history document at `path`
///
/// A missing or empty file is an empty history. A file that exists but does
/// not parse is an error.
pub fn load_history(path: &Path) -> Result<HistoryDocument> {
    if !path.exists() {
        debug!("No history file at {}, starting empty", path.display());
        return Ok(HistoryDocument::default());
    }

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read history file: {}", path.display()))?;

    // An empty file is what an interrupted first write leaves behind
    if json.trim().is_empty() {
        return Ok(HistoryDocument::default());
    }

    serde_json::from_str(&json).map_err(|e| {
        anyhow!("History file is corrupt: {} ({}); fix or remove it to continue", path.display(), e)
    })
}

/// Rewrite the whole history document atomically (temp file + rename)
pub fn save_history(path: &Path, document: &HistoryDocument) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create history directory: {}", parent.display())
            })?;
        }
    }

    let temp = temp_path(path);
    let json = serde_json::to_string_pretty(document).context("Failed to serialize history")?;
    fs::write(&temp, json)
        .with_context(|| format!("Failed to write history temp file: {}", temp.display()))?;
    fs::rename(&temp, path)
        .with_context(|| format!("Failed to rename history temp file to {}", path.display()))?;

    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_else(|| OsString::from("history"));
    name.push(".tmp");
    path.with_file_name(name)
}
