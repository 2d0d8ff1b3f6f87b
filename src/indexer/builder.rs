//! File index builder.
//!
//! # Traversal
//!
//! - The walk starts at the configured root and visits entries sorted by file
//!   name, so insertion order is deterministic for a given tree.
//! - Directories whose joined path is ignored are pruned: they are never
//!   descended into, and nothing beneath them is indexed.
//! - Every non-directory entry whose full path is not ignored is indexed
//!   under its bare file name. Symlinks are indexed like files; whether they
//!   can be read is decided at scan time.
//!
//! # Error Handling Strategy
//!
//! Walk errors (unreadable directories, entries vanishing mid-walk) are
//! logged at debug level and skipped. A missing root yields an empty index
//! with a warning rather than an error, mirroring how a missing history file
//! is treated as empty.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::path_filter::IgnoreSet;
use crate::utils::same_file;

/// Snapshot mapping bare file names to paths
///
/// Names are not unique across a tree. When a later entry shares a name with
/// an earlier one it replaces the stored path but keeps the earlier entry's
/// position, so iteration order stays the order names were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileIndex {
    entries: Vec<(String, PathBuf)>,
    positions: HashMap<String, usize>,
}

impl FileIndex {
    /// Walk `root` and index every file not excluded by `ignore`
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use linesweep::indexer::{FileIndex, IgnoreSet};
    ///
    /// let ignore = IgnoreSet::new().with("target");
    /// let index = FileIndex::build(Path::new("."), &ignore);
    /// println!("Indexed {} files", index.len());
    /// ```
    pub fn build(root: &Path, ignore: &IgnoreSet) -> Self {
        let mut index = FileIndex::default();

        if !root.exists() {
            warn!("Index root {} does not exist", root.display());
            return index;
        }

        let walker = WalkDir::new(root).sort_by_file_name().into_iter().filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            let ignored = ignore.is_ignored_path(entry.path());
            if ignored {
                debug!("Pruning ignored path {}", entry.path().display());
            }
            !ignored
        });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("Skipping unreadable entry during walk: {}", e);
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            index.insert(name, entry.into_path());
        }

        info!("Indexed {} files under {}", index.len(), root.display());
        index
    }

    fn insert(&mut self, name: String, path: PathBuf) {
        match self.positions.get(&name) {
            Some(&pos) => self.entries[pos].1 = path,
            None => {
                self.positions.insert(name.clone(), self.entries.len());
                self.entries.push((name, path));
            }
        }
    }

    /// Returns a copy of this index without any entry pointing at `path`
    #[must_use]
    pub fn without_file(&self, path: &Path) -> Self {
        let target_name = path.file_name();
        let mut next = FileIndex::default();
        for (name, entry_path) in &self.entries {
            let candidate = target_name == Some(OsStr::new(name)) && same_file(entry_path, path);
            if !candidate {
                next.insert(name.clone(), entry_path.clone());
            }
        }
        next
    }

    pub fn get(&self, name: &str) -> Option<&Path> {
        self.positions.get(name).map(|&pos| self.entries[pos].1.as_path())
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries.iter().map(|(name, path)| (name.as_str(), path.as_path()))
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(|(_, path)| path.as_path())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
