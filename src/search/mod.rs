//! Plain-substring search over indexed files
//!
//! # Error Handling Strategy
//!
//! A search never fails because of one file. Each indexed file is read as
//! UTF-8 text; if that fails (permissions, invalid encoding, file removed
//! since indexing) the file is logged at debug level and skipped, and the
//! scan continues with the next one.
//!
//! # Ordering
//!
//! Matches come out file by file in index order, and by ascending line
//! number within a file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::classifier::classify;
use crate::indexer::FileIndex;
use crate::models::{Match, SearchOutcome};
use crate::utils::strip_line_ending;

/// Scans a [`FileIndex`] snapshot for lines containing a pattern
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'a> {
    index: &'a FileIndex,
}

impl<'a> SearchEngine<'a> {
    pub fn new(index: &'a FileIndex) -> Self {
        Self { index }
    }

    /// Every line containing `pattern` as a case-sensitive substring
    ///
    /// An empty result means nothing matched; it is not an error. An empty
    /// pattern matches nothing.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use linesweep::indexer::{FileIndex, IgnoreSet};
    /// use linesweep::search::SearchEngine;
    ///
    /// let index = FileIndex::build(Path::new("."), &IgnoreSet::new());
    /// for m in SearchEngine::new(&index).search("com.example:lib") {
    ///     println!("{}", m);
    /// }
    /// ```
    pub fn search(&self, pattern: &str) -> Vec<Match> {
        let mut matches = Vec::new();
        if pattern.is_empty() {
            return matches;
        }
        for path in self.index.paths() {
            scan_file(path, pattern, &mut matches);
        }
        matches
    }

    /// Search, short-circuiting when `pattern` is exactly an indexed file name
    pub fn lookup(&self, pattern: &str) -> SearchOutcome {
        if let Some(path) = self.index.get(pattern) {
            return SearchOutcome::File { name: pattern.to_string(), path: path.to_path_buf() };
        }
        SearchOutcome::Matches(self.search(pattern))
    }
}

fn scan_file(path: &Path, pattern: &str, matches: &mut Vec<Match>) {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            debug!("Skipping unreadable file {}: {}", path.display(), e);
            return;
        }
    };

    for (idx, raw) in content.split_inclusive('\n').enumerate() {
        let line = strip_line_ending(raw);
        if line.contains(pattern) {
            matches.push(Match {
                file: path.to_path_buf(),
                line_number: idx + 1,
                line_content: line.to_string(),
                tag: classify(line),
            });
        }
    }
}
