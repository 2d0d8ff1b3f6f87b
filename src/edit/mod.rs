//! Idempotent pattern replacement
//!
//! [`EditEngine`] runs a search, drops every match that history says was
//! already resolved, asks a [`Decide`] implementation what to do with the
//! rest, and rewrites files one line at a time. The same engine serves batch
//! edits ([`FixedReplacement`]), programmatic callers ([`decide_fn`]) and the
//! interactive prompt in the CLI.
//!
//! # Error Handling Strategy
//!
//! - **Changed files**: A line that no longer matches by the time it is
//!   written is recorded as skipped, not treated as an error.
//! - **Decision and storage failures**: Propagated immediately. Everything
//!   resolved before the failure is already persisted.

pub mod decision;
pub mod engine;

pub use decision::{Decide, DecideFn, Decision, FixedReplacement, Proposal, decide_fn};
pub use engine::EditEngine;
