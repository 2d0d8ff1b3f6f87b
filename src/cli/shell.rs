use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use super::commands::{write_report, write_search};
use super::prompt::Prompt;
use crate::workspace::Workspace;

/// Line-oriented interactive session
///
/// - `edit <pattern>` walks matches with an interactive prompt
/// - `ignore <substring>` excludes matching paths and reindexes
/// - `reset` clears the ignore list and reindexes
/// - anything else is searched for
///
/// An empty line or end of input ends the session.
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// # Errors
    ///
    /// Returns an error if reading input, writing output or persisting
    /// history fails.
    pub fn run(&mut self, workspace: &mut Workspace) -> Result<()> {
        writeln!(
            self.output,
            "Enter a pattern to search (or use 'edit <pattern>', 'ignore <folder_or_file>' to ignore, 'reset' to clear ignores):"
        )?;

        loop {
            write!(self.output, "input: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line).context("Failed to read input")? == 0 {
                break;
            }
            let command = line.trim();
            if command.is_empty() {
                break;
            }

            if let Some(pattern) = command.strip_prefix("edit ") {
                let pattern = pattern.trim();
                let report = {
                    let mut prompt = Prompt::new(&mut self.input, &mut self.output);
                    workspace.edit(pattern, &mut prompt)?
                };
                write_report(&mut self.output, &report, pattern)?;
            } else if let Some(substr) = command.strip_prefix("ignore ") {
                let substr = substr.trim();
                workspace.ignore(substr);
                writeln!(self.output, "'{}' added to ignore list.", substr)?;
            } else if command == "reset" {
                workspace.reset_ignore();
                writeln!(self.output, "Ignore list reset.")?;
            } else {
                let outcome = workspace.search(command)?;
                write_search(&mut self.output, &outcome, command)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Cursor;

    use tempfile::TempDir;

    use super::*;
    use crate::config::Config;

    fn session(dir: &TempDir, input: &str) -> String {
        let config = Config::new(dir.path().join("tree"), dir.path().join("history.json"));
        let mut workspace = Workspace::open(config).unwrap();
        let mut out = Vec::new();
        Shell::new(Cursor::new(input.to_string()), &mut out).run(&mut workspace).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn write(dir: &TempDir, rel: &str, content: &str) {
        let path = dir.path().join("tree").join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_search_then_exit_on_empty_line() {
        let dir = TempDir::new().unwrap();
        write(&dir, "A.java", "import com.x.Foo;\n");

        let out = session(&dir, "com.x\n\nnever reached\n");

        assert!(out.contains("[Import] in "));
        assert!(out.contains("line 1: import com.x.Foo;"));
        assert!(!out.contains("never reached"));
    }

    #[test]
    fn test_file_name_short_circuits() {
        let dir = TempDir::new().unwrap();
        write(&dir, "sub/A.java", "A.java\n");

        let out = session(&dir, "A.java\n");

        assert!(out.contains("'A.java' is a file located at: "));
    }

    #[test]
    fn test_ignore_then_reset() {
        let dir = TempDir::new().unwrap();
        write(&dir, "generated/B.java", "needle\n");

        let out = session(&dir, "ignore generated\nneedle\nreset\nneedle\n");

        assert!(out.contains("'generated' added to ignore list."));
        assert!(out.contains("'needle' not found in any files."));
        assert!(out.contains("Ignore list reset."));
        assert!(out.contains("line 1: needle"));
    }

    #[test]
    fn test_edit_reads_replacements_from_same_input() {
        let dir = TempDir::new().unwrap();
        write(&dir, "gradle.properties", "a=1.0\nb=1.0\n");

        let out = session(&dir, "edit 1.0\n2.0\n\n");

        assert!(out.contains("Updated "));
        assert!(out.contains("Skipped"));
        assert_eq!(
            fs::read_to_string(dir.path().join("tree/gradle.properties")).unwrap(),
            "a=2.0\nb=1.0\n"
        );
    }
}
