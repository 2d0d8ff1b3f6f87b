use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::decision::{Decide, Decision, Proposal};
use crate::history::EditHistory;
use crate::indexer::FileIndex;
use crate::models::{
    EditOutcome, EditReport, HistoryRecord, HistoryStatus, Match, SkipReason,
};
use crate::search::SearchEngine;
use crate::utils::{line_ending, path_key, strip_line_ending};

/// Applies decisions to matched lines and records every resolution
pub struct EditEngine<'a> {
    index: &'a FileIndex,
    history: &'a mut EditHistory,
}

impl<'a> EditEngine<'a> {
    pub fn new(index: &'a FileIndex, history: &'a mut EditHistory) -> Self {
        Self { index, history }
    }

    /// Search for `pattern` and resolve each match through `decider`
    ///
    /// Matches are visited in file-then-line order. For each one:
    ///
    /// 1. If history already holds this file and line text, it is counted in
    ///    [`EditReport::already_handled`] and never shown to `decider`.
    /// 2. A non-empty [`Decision::Replace`] rewrites that single line in place
    ///    and records it as updated, provided the line on disk is still the one
    ///    that was matched.
    /// 3. Anything else is recorded as skipped with no file write.
    ///
    /// History is flushed after every resolved line, so stopping early (by
    /// [`Decision::Stop`] or an error) leaves no record for lines not reached.
    ///
    /// # Errors
    ///
    /// Returns an error if `decider` fails, a target file cannot be written, or
    /// history cannot be persisted.
    pub fn edit<D>(&mut self, pattern: &str, decider: &mut D) -> Result<EditReport>
    where
        D: Decide + ?Sized,
    {
        let mut report = EditReport::default();
        let matches = SearchEngine::new(self.index).search(pattern);
        report.matched = matches.len();

        for m in matches {
            let file_key = path_key(&m.file);
            if self.history.already_handled(&file_key, &m.line_content, pattern) {
                debug!("Already handled: {}, line {}", m.file.display(), m.line_number);
                report.already_handled += 1;
                continue;
            }

            let proposal = Proposal {
                file: &m.file,
                line_number: m.line_number,
                line_content: &m.line_content,
                tag: m.tag,
                pattern,
            };

            let outcome = match decider.decide(&proposal)? {
                Decision::Stop => {
                    report.stopped = true;
                    break;
                }
                Decision::Skip => self.skip(&m, SkipReason::Declined)?,
                Decision::Replace(replacement) if replacement.is_empty() => {
                    self.skip(&m, SkipReason::Declined)?
                }
                Decision::Replace(replacement) if replacement.contains(['\n', '\r']) => {
                    self.skip(&m, SkipReason::MultiLineReplacement)?
                }
                Decision::Replace(replacement) => self.replace(&m, pattern, &replacement)?,
            };
            report.outcomes.push(outcome);
        }

        Ok(report)
    }

    fn replace(&mut self, m: &Match, pattern: &str, replacement: &str) -> Result<EditOutcome> {
        let Some(updated) =
            rewrite_line(&m.file, m.line_number, &m.line_content, pattern, replacement)?
        else {
            return self.skip(m, SkipReason::PatternMissing);
        };

        info!("Updated {}, line {}", m.file.display(), m.line_number);
        self.history.record(
            HistoryStatus::Updated,
            HistoryRecord::updated(path_key(&m.file), m.line_number, &m.line_content, &updated),
        )?;

        Ok(EditOutcome::Updated {
            file: m.file.clone(),
            line_number: m.line_number,
            original: m.line_content.clone(),
            updated,
        })
    }

    fn skip(&mut self, m: &Match, reason: SkipReason) -> Result<EditOutcome> {
        debug!("Skipped {}, line {} ({:?})", m.file.display(), m.line_number, reason);
        self.history.record(
            HistoryStatus::Skipped,
            HistoryRecord::skipped(path_key(&m.file), m.line_number, &m.line_content),
        )?;

        Ok(EditOutcome::Skipped {
            file: m.file.clone(),
            line_number: m.line_number,
            original: m.line_content.clone(),
            reason,
        })
    }
}

/// Replace `pattern` within one line of `path`, leaving every other byte alone
///
/// The file is re-read first. Returns `Ok(None)` without writing when the file
/// is gone, or the line at `line_number` no longer reads `original` or no
/// longer contains `pattern`.
fn rewrite_line(
    path: &Path,
    line_number: usize,
    original: &str,
    pattern: &str,
    replacement: &str,
) -> Result<Option<String>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            debug!("Cannot re-read {} before writing: {}", path.display(), e);
            return Ok(None);
        }
    };

    let mut lines: Vec<&str> = content.split_inclusive('\n').collect();
    let Some(idx) = line_number.checked_sub(1).filter(|&idx| idx < lines.len()) else {
        return Ok(None);
    };

    let current = strip_line_ending(lines[idx]);
    if current != original || !current.contains(pattern) {
        return Ok(None);
    }

    let updated = current.replace(pattern, replacement);
    let rewritten = format!("{}{}", updated, line_ending(lines[idx]));
    lines[idx] = &rewritten;

    fs::write(path, lines.concat())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(Some(updated))
}
