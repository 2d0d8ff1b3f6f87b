//! Process state for one search/edit session.
//!
//! A [`Workspace`] owns the current [`Config`], the [`FileIndex`] built from
//! it, and the [`EditHistory`]. Ignore changes swap in a new config and a
//! freshly built index. All methods need `&mut self` or `&self`, so a host
//! that shares a workspace between callers must serialize access itself.

use std::path::Path;

use anyhow::{Result, bail};
use tracing::info;

use crate::config::Config;
use crate::edit::{Decide, EditEngine};
use crate::history::EditHistory;
use crate::indexer::FileIndex;
use crate::models::{EditReport, Match, SearchOutcome};
use crate::search::SearchEngine;

#[derive(Debug)]
pub struct Workspace {
    config: Config,
    index: FileIndex,
    history: EditHistory,
}

impl Workspace {
    /// Load history and index the configured root
    ///
    /// # Errors
    ///
    /// Returns an error if the history file exists but cannot be read or parsed.
    pub fn open(config: Config) -> Result<Self> {
        let history = EditHistory::open(config.history_path())?;
        info!(
            "Loaded {} history records from {}",
            history.len(),
            config.history_path().display()
        );
        let index = build_index(&config);
        Ok(Self { config, index, history })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn index(&self) -> &FileIndex {
        &self.index
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// Exclude paths containing `substr` and rebuild the index
    pub fn ignore(&mut self, substr: &str) {
        self.replace_config(self.config.with_ignored(substr));
    }

    /// Clear the ignore set and rebuild the index
    pub fn reset_ignore(&mut self) {
        self.replace_config(self.config.without_ignores());
    }

    fn replace_config(&mut self, config: Config) {
        self.index = build_index(&config);
        self.config = config;
    }

    pub fn find_file(&self, name: &str) -> Option<&Path> {
        self.index.get(name)
    }

    /// # Errors
    ///
    /// Returns an error if `pattern` is empty.
    pub fn search(&self, pattern: &str) -> Result<SearchOutcome> {
        ensure_pattern(pattern)?;
        Ok(SearchEngine::new(&self.index).lookup(pattern))
    }

    /// Content scan without the file-name short-circuit
    ///
    /// # Errors
    ///
    /// Returns an error if `pattern` is empty.
    pub fn scan(&self, pattern: &str) -> Result<Vec<Match>> {
        ensure_pattern(pattern)?;
        Ok(SearchEngine::new(&self.index).search(pattern))
    }

    /// # Errors
    ///
    /// Returns an error if `pattern` is empty, or if the edit itself fails
    /// (see [`EditEngine::edit`]).
    pub fn edit<D>(&mut self, pattern: &str, decider: &mut D) -> Result<EditReport>
    where
        D: Decide + ?Sized,
    {
        ensure_pattern(pattern)?;
        EditEngine::new(&self.index, &mut self.history).edit(pattern, decider)
    }
}

fn build_index(config: &Config) -> FileIndex {
    FileIndex::build(config.root(), config.ignore()).without_file(config.history_path())
}

fn ensure_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        bail!("Pattern must not be empty");
    }
    Ok(())
}
