use std::path::{Path, PathBuf};

use anyhow::Result;

use super::persistence::{load_history, save_history};
use crate::models::{HistoryDocument, HistoryRecord, HistoryStatus};

/// Record of every line already resolved, backed by a JSON file
///
/// The in-memory document is loaded once and flushed in full after every
/// [`record`](EditHistory::record), so the file on disk is always complete up
/// to the last resolved line.
#[derive(Debug, Clone)]
pub struct EditHistory {
    path: PathBuf,
    document: HistoryDocument,
}

impl EditHistory {
    /// Load history from `path`, treating a missing file as empty
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let document = load_history(&path)?;
        Ok(Self { path, document })
    }

    /// In-memory history that still persists to `path` on the first record
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), document: HistoryDocument::default() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &HistoryDocument {
        &self.document
    }

    pub fn records(&self, status: HistoryStatus) -> &[HistoryRecord] {
        self.document.records(status)
    }

    pub fn len(&self) -> usize {
        self.document.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
    }

    /// Whether `line` in `file` was resolved before, for a run over `pattern`
    ///
    /// Keyed on file plus exact line text, never on line number. A line whose
    /// text equals the output of an earlier update also counts, but only if
    /// that update's original line contained `pattern`; output of an update
    /// of another pattern stays eligible.
    pub fn already_handled(&self, file: &str, line: &str, pattern: &str) -> bool {
        let resolved = self
            .document
            .updated
            .iter()
            .chain(self.document.skipped.iter())
            .any(|r| r.file == file && r.line_content == line);

        resolved
            || self.document.updated.iter().any(|r| {
                r.file == file
                    && r.new_content.as_deref() == Some(line)
                    && r.line_content.contains(pattern)
            })
    }

    /// Append a record and persist the whole history
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be written. The record is
    /// dropped from memory in that case so memory never claims more than disk.
    pub fn record(&mut self, status: HistoryStatus, record: HistoryRecord) -> Result<()> {
        self.document.push(status, record);
        if let Err(e) = save_history(&self.path, &self.document) {
            match status {
                HistoryStatus::Updated => self.document.updated.pop(),
                HistoryStatus::Skipped => self.document.skipped.pop(),
            };
            return Err(e);
        }
        Ok(())
    }
}
