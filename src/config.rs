//! Immutable run configuration.

use std::path::{Path, PathBuf};

use crate::indexer::IgnoreSet;

/// Default history file name, resolved against the working directory
pub const DEFAULT_HISTORY_FILE: &str = "update_history.json";

/// Where to look, where to remember, and what to leave out
///
/// Changing the ignore set produces a new value; nothing mutates a config
/// that an index was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    root: PathBuf,
    history_path: PathBuf,
    ignore: IgnoreSet,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>, history_path: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), history_path: history_path.into(), ignore: IgnoreSet::new() }
    }

    #[must_use]
    pub fn with_ignore_set(self, ignore: IgnoreSet) -> Self {
        Self { ignore, ..self }
    }

    #[must_use]
    pub fn with_ignored(&self, substr: &str) -> Self {
        Self { ignore: self.ignore.with(substr), ..self.clone() }
    }

    #[must_use]
    pub fn without_ignores(&self) -> Self {
        Self { ignore: IgnoreSet::new(), ..self.clone() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn history_path(&self) -> &Path {
        &self.history_path
    }

    pub fn ignore(&self) -> &IgnoreSet {
        &self.ignore
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(".", DEFAULT_HISTORY_FILE)
    }
}
