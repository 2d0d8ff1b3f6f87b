//! Pluggable decision sources for the edit engine.

use std::path::Path;

use anyhow::{Result, bail};

use crate::models::ClassificationTag;

/// A matched line awaiting a decision
#[derive(Debug, Clone, Copy)]
pub struct Proposal<'a> {
    pub file: &'a Path,
    pub line_number: usize,
    pub line_content: &'a str,
    pub tag: ClassificationTag,
    pub pattern: &'a str,
}

/// What to do with one proposal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Replace every occurrence of the pattern in the line with this text.
    /// An empty string is treated as [`Decision::Skip`].
    Replace(String),
    /// Leave the line alone and remember that it was seen
    Skip,
    /// End the run now; this line and the rest stay unresolved
    Stop,
}

/// Anything that can decide the fate of a matched line
pub trait Decide {
    fn decide(&mut self, proposal: &Proposal<'_>) -> Result<Decision>;
}

/// Batch mode: same replacement for every line, no confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedReplacement {
    replacement: String,
}

impl FixedReplacement {
    /// # Errors
    ///
    /// Returns an error if `replacement` contains a line break.
    pub fn new(replacement: impl Into<String>) -> Result<Self> {
        let replacement = replacement.into();
        if replacement.contains(['\n', '\r']) {
            bail!("Replacement must be a single line");
        }
        Ok(Self { replacement })
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

impl Decide for FixedReplacement {
    fn decide(&mut self, _proposal: &Proposal<'_>) -> Result<Decision> {
        if self.replacement.is_empty() {
            return Ok(Decision::Skip);
        }
        Ok(Decision::Replace(self.replacement.clone()))
    }
}

/// Decision source backed by a closure, see [`decide_fn`]
pub struct DecideFn<F> {
    f: F,
}

impl<F> Decide for DecideFn<F>
where
    F: FnMut(&Proposal<'_>) -> Decision,
{
    fn decide(&mut self, proposal: &Proposal<'_>) -> Result<Decision> {
        Ok((self.f)(proposal))
    }
}

/// Wraps a closure as a [`Decide`] implementation
///
/// # Examples
///
/// ```
/// use linesweep::edit::{Decide, Decision, decide_fn};
///
/// let mut bump = decide_fn(|p| {
///     if p.line_content.contains("keep") { Decision::Skip } else { Decision::Replace("2.0".into()) }
/// });
/// # let _ = &mut bump;
/// ```
pub fn decide_fn<F>(f: F) -> DecideFn<F>
where
    F: FnMut(&Proposal<'_>) -> Decision,
{
    DecideFn { f }
}
