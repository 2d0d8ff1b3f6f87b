//! Data models shared across the crate.
//!
//! - [`ClassificationTag`] - Heuristic syntactic role of a line
//! - [`Match`] / [`SearchOutcome`] - Search results
//! - [`HistoryRecord`] / [`HistoryDocument`] - Persisted record of resolved lines
//! - [`EditOutcome`] / [`EditReport`] - Result of an edit run
//!
//! History types derive serde traits; their JSON shape is the on-disk history
//! file format and must stay stable.

pub mod edit;
pub mod history;
pub mod search;
pub mod tag;

pub use edit::{EditOutcome, EditReport, SkipReason};
pub use history::{HistoryDocument, HistoryRecord, HistoryStatus};
pub use search::{Match, SearchOutcome};
pub use tag::ClassificationTag;
