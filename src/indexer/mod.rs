//! File indexing for pattern search
//!
//! # Error Handling Strategy
//!
//! Indexing never fails as a whole:
//!
//! - **Walk-level failures**: Unreadable directories and entries that vanish
//!   mid-walk are logged and skipped.
//!
//! - **File-level failures**: Nothing is opened while indexing. Files that
//!   turn out to be unreadable (permissions, invalid UTF-8, removed since the
//!   walk) are skipped later, at scan time.
//!
//! - **Snapshots**: Every build returns a fresh [`FileIndex`]. Changing the
//!   ignore set means building a new index, never mutating an old one.

pub mod builder;
pub mod path_filter;

pub use builder::FileIndex;
pub use path_filter::IgnoreSet;
