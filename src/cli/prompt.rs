use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::edit::{Decide, Decision, Proposal};

/// Asks for a replacement on `output` and reads it from `input`
///
/// An empty answer skips the line; end of input stops the run.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Decide for Prompt<R, W> {
    fn decide(&mut self, proposal: &Proposal<'_>) -> Result<Decision> {
        writeln!(
            self.output,
            "\n{} Found in {}, line {}:\n{}",
            proposal.tag,
            proposal.file.display(),
            proposal.line_number,
            proposal.line_content
        )?;
        write!(self.output, "Enter replacement (or press Enter to skip): ")?;
        self.output.flush()?;

        let mut answer = String::new();
        let read = self.input.read_line(&mut answer).context("Failed to read replacement")?;
        if read == 0 {
            writeln!(self.output)?;
            return Ok(Decision::Stop);
        }

        let answer = answer.trim();
        if answer.is_empty() {
            writeln!(self.output, "Skipped")?;
            return Ok(Decision::Skip);
        }
        Ok(Decision::Replace(answer.to_string()))
    }
}
