use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ClassificationTag;

/// One line in one indexed file that contains the search pattern
///
/// `line_number` is 1-based and `line_content` has its line terminator removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub file: PathBuf,
    pub line_number: usize,
    pub line_content: String,
    pub tag: ClassificationTag,
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in {}, line {}: {}",
            self.tag,
            self.file.display(),
            self.line_number,
            self.line_content.trim()
        )
    }
}

/// Result of a user-facing search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The pattern is exactly the name of an indexed file; contents were not scanned
    File { name: String, path: PathBuf },
    /// Every line containing the pattern, in file-then-line order (possibly empty)
    Matches(Vec<Match>),
}
