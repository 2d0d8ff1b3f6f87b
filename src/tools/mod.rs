//! Request/response tool boundary
//!
//! [`ToolHost`] exposes a [`Workspace`] as a small set of named tools that
//! take JSON arguments and answer with plain text. [`serve`] drives a host
//! over a JSON-lines stream (one request per line in, one response per line
//! out), which is what the `serve` subcommand wires to stdin/stdout.
//!
//! | Tool | Arguments | Effect |
//! |---|---|---|
//! | `find_file` | `filename` | Path of an indexed file |
//! | `classify_pattern` | `pattern` | Every matching line with its tag |
//! | `edit_dependency` | `pattern`, `replacement` | Batch edit; empty replacement skips |
//! | `ignore_path` | `path` | Add an ignore substring and rebuild |
//! | `reset_ignore` | none | Clear ignores and rebuild |
//! | `list_tools` | none | Tool names, descriptions and argument schemas |
//!
//! # Error Handling Strategy
//!
//! Dispatch never fails the host. Unknown tools, undecodable arguments and
//! errors from the workspace all come back as a [`ToolResponse`] with
//! `is_error` set.

pub mod stdio;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::edit::FixedReplacement;
use crate::workspace::Workspace;

pub use stdio::serve;

/// Text answer to one tool call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResponse {
    pub text: String,
    pub is_error: bool,
}

impl ToolResponse {
    pub fn ok(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: false }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: true }
    }
}

#[derive(Debug, Deserialize)]
struct FileNameArgs {
    filename: String,
}

#[derive(Debug, Deserialize)]
struct PatternArgs {
    pattern: String,
}

#[derive(Debug, Deserialize)]
struct EditArgs {
    pattern: String,
    replacement: String,
}

#[derive(Debug, Deserialize)]
struct IgnoreArgs {
    path: String,
}

/// Owns a workspace and answers named tool calls against it
#[derive(Debug)]
pub struct ToolHost {
    workspace: Workspace,
}

impl ToolHost {
    pub fn new(workspace: Workspace) -> Self {
        Self { workspace }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Run one tool call; any failure becomes an error response
    pub fn call(&mut self, tool: &str, arguments: Value) -> ToolResponse {
        debug!("Tool call: {}", tool);
        match self.dispatch(tool, arguments) {
            Ok(response) => response,
            Err(e) => {
                warn!("Tool {} failed: {:#}", tool, e);
                ToolResponse::error(format!("Error: {:#}", e))
            }
        }
    }

    fn dispatch(&mut self, tool: &str, arguments: Value) -> Result<ToolResponse> {
        match tool {
            "find_file" => {
                let args: FileNameArgs = decode(arguments)?;
                Ok(self.find_file(&args.filename))
            }
            "classify_pattern" => {
                let args: PatternArgs = decode(arguments)?;
                self.classify_pattern(&args.pattern)
            }
            "edit_dependency" => {
                let args: EditArgs = decode(arguments)?;
                self.edit_dependency(&args.pattern, &args.replacement)
            }
            "ignore_path" => {
                let args: IgnoreArgs = decode(arguments)?;
                self.workspace.ignore(&args.path);
                Ok(ToolResponse::ok(format!("Ignored path: {}", args.path)))
            }
            "reset_ignore" => {
                self.workspace.reset_ignore();
                Ok(ToolResponse::ok("Ignore list has been reset."))
            }
            "list_tools" => Ok(ToolResponse::ok(serde_json::to_string_pretty(&tool_list())?)),
            other => Ok(ToolResponse::error(format!("Unknown tool: {}", other))),
        }
    }

    fn find_file(&self, filename: &str) -> ToolResponse {
        match self.workspace.find_file(filename) {
            Some(path) => ToolResponse::ok(format!("{} -> {}", filename, path.display())),
            None => ToolResponse::ok(format!("File '{}' not found.", filename)),
        }
    }

    fn classify_pattern(&self, pattern: &str) -> Result<ToolResponse> {
        let matches = self.workspace.scan(pattern)?;
        if matches.is_empty() {
            return Ok(ToolResponse::ok(format!("No matches found for '{}'", pattern)));
        }
        let lines: Vec<String> = matches.iter().map(ToString::to_string).collect();
        Ok(ToolResponse::ok(lines.join("\n")))
    }

    fn edit_dependency(&mut self, pattern: &str, replacement: &str) -> Result<ToolResponse> {
        let mut decider = FixedReplacement::new(replacement)?;
        let report = self.workspace.edit(pattern, &mut decider)?;

        if report.no_matches() {
            return Ok(ToolResponse::ok(format!("No matches found for '{}'", pattern)));
        }
        if report.outcomes.is_empty() {
            return Ok(ToolResponse::ok(format!(
                "All matches for '{}' were already handled",
                pattern
            )));
        }
        let lines: Vec<String> = report.outcomes.iter().map(ToString::to_string).collect();
        Ok(ToolResponse::ok(lines.join("\n")))
    }
}

fn decode<T: for<'de> Deserialize<'de>>(arguments: Value) -> Result<T> {
    // Tools without parameters may be called with `null` arguments
    let arguments = if arguments.is_null() { json!({}) } else { arguments };
    serde_json::from_value(arguments).context("Invalid arguments")
}

/// Names, descriptions and argument schemas of every tool
pub fn tool_list() -> Value {
    json!([
        {
            "name": "find_file",
            "description": "Find full file path by name",
            "parameters": string_args(&["filename"]),
        },
        {
            "name": "classify_pattern",
            "description": "Find and classify any matching line",
            "parameters": string_args(&["pattern"]),
        },
        {
            "name": "edit_dependency",
            "description": "Replace a pattern in every matching line not already handled",
            "parameters": string_args(&["pattern", "replacement"]),
        },
        {
            "name": "ignore_path",
            "description": "Ignore every file or folder whose path contains a substring",
            "parameters": string_args(&["path"]),
        },
        {
            "name": "reset_ignore",
            "description": "Reset all ignored paths",
            "parameters": string_args(&[]),
        },
        {
            "name": "list_tools",
            "description": "List available tools",
            "parameters": string_args(&[]),
        },
    ])
}

fn string_args(names: &[&str]) -> Value {
    let properties: serde_json::Map<String, Value> =
        names.iter().map(|name| (name.to_string(), json!({ "type": "string" }))).collect();
    json!({ "type": "object", "properties": properties, "required": names })
}
