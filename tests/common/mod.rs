//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use linesweep::{Config, Workspace};
use tempfile::TempDir;

/// Builder for a temporary source tree plus a history file beside it
///
/// Layout: `<tmp>/tree/...` is the indexed root and `<tmp>/update_history.json`
/// is the history file, so history never lands inside the index.
pub struct TreeBuilder {
    temp_dir: TempDir,
}

impl TreeBuilder {
    /// Create a new builder with an empty tree
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir(temp_dir.path().join("tree")).expect("Failed to create tree dir");
        Self { temp_dir }
    }

    /// Add a file at `rel` (relative to the tree root) with the given content
    pub fn with_file(self, rel: &str, content: &str) -> Self {
        self.with_bytes(rel, content.as_bytes())
    }

    /// Add a file with raw bytes, e.g. invalid UTF-8
    pub fn with_bytes(self, rel: &str, content: &[u8]) -> Self {
        let path = self.temp_dir.path().join("tree").join(rel);
        fs::create_dir_all(path.parent().expect("File has no parent"))
            .expect("Failed to create parent dir");
        fs::write(&path, content).expect("Failed to write file");
        self
    }

    /// Seed the history file with raw JSON
    pub fn with_history(self, content: &str) -> Self {
        fs::write(self.history_path(), content).expect("Failed to write history");
        self
    }

    pub fn build(self) -> Tree {
        Tree { temp_dir: self.temp_dir }
    }

    fn history_path(&self) -> PathBuf {
        self.temp_dir.path().join("update_history.json")
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A built tree; dropping it removes everything
pub struct Tree {
    temp_dir: TempDir,
}

impl Tree {
    pub fn base(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn root(&self) -> PathBuf {
        self.temp_dir.path().join("tree")
    }

    pub fn history_path(&self) -> PathBuf {
        self.temp_dir.path().join("update_history.json")
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).expect("Failed to read file")
    }

    pub fn write(&self, rel: &str, content: &str) {
        fs::write(self.path(rel), content).expect("Failed to write file");
    }

    pub fn history_json(&self) -> serde_json::Value {
        let raw = fs::read_to_string(self.history_path()).expect("Failed to read history");
        serde_json::from_str(&raw).expect("History is not valid JSON")
    }

    pub fn config(&self) -> Config {
        Config::new(self.root(), self.history_path())
    }

    pub fn open(&self) -> Workspace {
        Workspace::open(self.config()).expect("Failed to open workspace")
    }
}
