use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Why a matched line was recorded as skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The decision source declined (empty replacement or explicit skip)
    Declined,
    /// The line changed on disk between scan and write
    PatternMissing,
    /// The replacement contained a line break
    MultiLineReplacement,
}

/// What happened to one resolved line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditOutcome {
    Updated { file: PathBuf, line_number: usize, original: String, updated: String },
    Skipped { file: PathBuf, line_number: usize, original: String, reason: SkipReason },
}

impl fmt::Display for EditOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditOutcome::Updated { file, line_number, .. } => {
                write!(f, "Updated {}, line {}", file.display(), line_number)
            }
            EditOutcome::Skipped { file, line_number, reason, .. } => {
                let why = match reason {
                    SkipReason::Declined => "skipped",
                    SkipReason::PatternMissing => "pattern no longer present",
                    SkipReason::MultiLineReplacement => "replacement spans multiple lines",
                };
                write!(f, "Skipped {}, line {} ({})", file.display(), line_number, why)
            }
        }
    }
}

/// Summary of one edit run
///
/// `outcomes` holds only lines resolved during this run. Lines filtered out
/// by history are counted in `already_handled`, so an empty `outcomes` can be
/// told apart as "nothing matched" versus "everything was already handled".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditReport {
    pub outcomes: Vec<EditOutcome>,
    pub matched: usize,
    pub already_handled: usize,
    /// The decision source asked to stop before every match was visited
    pub stopped: bool,
}

impl EditReport {
    pub fn updated_count(&self) -> usize {
        self.outcomes.iter().filter(|o| matches!(o, EditOutcome::Updated { .. })).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.iter().filter(|o| matches!(o, EditOutcome::Skipped { .. })).count()
    }

    pub fn no_matches(&self) -> bool {
        self.matched == 0
    }

    pub fn all_already_handled(&self) -> bool {
        self.matched > 0 && self.already_handled == self.matched
    }
}
