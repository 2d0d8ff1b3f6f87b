//! Linesweep - Find, classify and idempotently rewrite lines across a file tree
//!
//! This library indexes a directory tree by file name and provides:
//!
//! - Substring search over every indexed file, tagging each matching line
//!   with a heuristic syntactic role (annotation, import, Gradle dependency...)
//! - Line-scoped replacement driven by a pluggable decision source
//! - A persistent JSON history of every resolved line, so re-running the
//!   same edit never presents or rewrites a line twice
//! - Ignore substrings that prune paths from the index
//!
//! # Example
//!
//! ```no_run
//! use linesweep::{Config, FixedReplacement, Workspace};
//!
//! let mut workspace = Workspace::open(Config::default().with_ignored("build/"))?;
//! let mut bump = FixedReplacement::new("lib:2.0")?;
//! let report = workspace.edit("lib:1.0", &mut bump)?;
//! println!("{} updated, {} already handled", report.updated_count(), report.already_handled);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod classifier;
pub mod cli;
pub mod config;
pub mod edit;
pub mod history;
pub mod indexer;
pub mod models;
pub mod search;
pub mod tools;
pub mod utils;
pub mod workspace;

// Re-export commonly used types
pub use classifier::classify;
pub use config::Config;
pub use edit::{Decide, Decision, FixedReplacement, decide_fn};
pub use history::EditHistory;
pub use indexer::{FileIndex, IgnoreSet};
pub use models::{ClassificationTag, EditOutcome, EditReport, Match, SearchOutcome};
pub use workspace::Workspace;
