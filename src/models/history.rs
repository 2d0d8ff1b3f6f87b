use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// How a line was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryStatus {
    Updated,
    Skipped,
}

impl HistoryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            HistoryStatus::Updated => "updated",
            HistoryStatus::Skipped => "skipped",
        }
    }
}

impl fmt::Display for HistoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HistoryStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "updated" => Ok(HistoryStatus::Updated),
            "skipped" => Ok(HistoryStatus::Skipped),
            _ => Err(anyhow!("Invalid status: '{}' (must be 'updated' or 'skipped')", s)),
        }
    }
}

/// A line that has already been resolved in some run
///
/// `new_content` is only present for updated lines and is omitted from the
/// JSON document for skipped ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub file: String,
    pub line_number: usize,
    pub line_content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_content: Option<String>,
}

impl HistoryRecord {
    pub fn updated(
        file: impl Into<String>,
        line_number: usize,
        line_content: impl Into<String>,
        new_content: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            line_number,
            line_content: line_content.into(),
            new_content: Some(new_content.into()),
        }
    }

    pub fn skipped(file: impl Into<String>, line_number: usize, line_content: impl Into<String>) -> Self {
        Self { file: file.into(), line_number, line_content: line_content.into(), new_content: None }
    }
}

/// On-disk shape of the history file: `{"updated": [...], "skipped": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryDocument {
    #[serde(default)]
    pub updated: Vec<HistoryRecord>,
    #[serde(default)]
    pub skipped: Vec<HistoryRecord>,
}

impl HistoryDocument {
    pub fn records(&self, status: HistoryStatus) -> &[HistoryRecord] {
        match status {
            HistoryStatus::Updated => &self.updated,
            HistoryStatus::Skipped => &self.skipped,
        }
    }

    pub fn push(&mut self, status: HistoryStatus, record: HistoryRecord) {
        match status {
            HistoryStatus::Updated => self.updated.push(record),
            HistoryStatus::Skipped => self.skipped.push(record),
        }
    }

    pub fn len(&self) -> usize {
        self.updated.len() + self.skipped.len()
    }

    pub fn is_empty(&self) -> bool {
        self.updated.is_empty() && self.skipped.is_empty()
    }
}
