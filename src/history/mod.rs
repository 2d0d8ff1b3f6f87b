//! Persistent record of resolved lines
//!
//! Stored as a single pretty-printed JSON document:
//!
//! ```json
//! {
//!   "updated": [
//!     { "file": "./build.gradle", "line_number": 3,
//!       "line_content": "implementation(\"com.example:lib:1.0\")",
//!       "new_content": "implementation(\"com.example:lib:2.0\")" }
//!   ],
//!   "skipped": [
//!     { "file": "./gradle.properties", "line_number": 1, "line_content": "lib=1.0" }
//!   ]
//! }
//! ```
//!
//! # Error Handling Strategy
//!
//! - **Missing file**: Treated as an empty history.
//! - **Corrupt file**: Fails fast. Discarding it would silently lose the
//!   guarantee that resolved lines are never presented again.
//! - **Write failures**: Propagated to the caller after every record.

pub mod persistence;
pub mod store;

pub use persistence::{load_history, save_history};
pub use store::EditHistory;
