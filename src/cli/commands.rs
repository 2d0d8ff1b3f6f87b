use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use super::prompt::Prompt;
use super::shell::Shell;
use crate::classifier::classify;
use crate::config::{Config, DEFAULT_HISTORY_FILE};
use crate::edit::FixedReplacement;
use crate::history::EditHistory;
use crate::indexer::IgnoreSet;
use crate::models::{EditReport, HistoryStatus, SearchOutcome};
use crate::tools::{ToolHost, serve};
use crate::workspace::Workspace;

#[derive(Parser)]
#[command(name = "linesweep")]
#[command(version)]
#[command(
    about = "Find, classify and rewrite lines matching a pattern across a file tree",
    long_about = None
)]
pub struct Cli {
    /// Directory to index
    #[arg(long, global = true, env = "LINESWEEP_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// History file recording every resolved line
    #[arg(long, global = true, env = "LINESWEEP_HISTORY", default_value = DEFAULT_HISTORY_FILE)]
    pub history: PathBuf,

    /// Skip every path containing this substring (repeatable)
    #[arg(long = "ignore", value_name = "SUBSTR", global = true)]
    pub ignore: Vec<String>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn config(&self) -> Config {
        let ignore: IgnoreSet = self.ignore.iter().map(String::as_str).collect();
        Config::new(&self.root, &self.history).with_ignore_set(ignore)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the path of an indexed file
    Find { name: String },

    /// List every line containing a pattern, with its tag
    Search { pattern: String },

    /// Print the tag of a single line
    Classify { line: String },

    /// Replace a pattern in every matching line not already handled
    Edit {
        pattern: String,

        /// Apply this replacement to every match without asking
        #[arg(long)]
        replace: Option<String>,
    },

    /// Show recorded history
    History {
        /// Only show records with this status (updated or skipped)
        #[arg(long)]
        status: Option<HistoryStatus>,
    },

    /// Interactive search and edit session
    Shell,

    /// Answer JSON-lines tool requests on stdin
    Serve,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config();
    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let mut out = io::stdout();

    match command {
        Commands::Classify { line } => {
            writeln!(out, "{}", classify(&line))?;
        }
        Commands::History { status } => {
            let history = EditHistory::open(config.history_path())?;
            write_history(&mut out, &history, status)?;
        }
        Commands::Find { name } => {
            let workspace = Workspace::open(config)?;
            match workspace.find_file(&name) {
                Some(path) => writeln!(out, "{} -> {}", name, path.display())?,
                None => writeln!(out, "File '{}' not found.", name)?,
            }
        }
        Commands::Search { pattern } => {
            let workspace = Workspace::open(config)?;
            let outcome = workspace.search(&pattern)?;
            write_search(&mut out, &outcome, &pattern)?;
        }
        Commands::Edit { pattern, replace } => {
            let mut workspace = Workspace::open(config)?;
            let report = match replace {
                Some(replacement) => {
                    let mut decider = FixedReplacement::new(replacement)?;
                    workspace.edit(&pattern, &mut decider)?
                }
                None => {
                    let mut prompt = Prompt::new(io::stdin().lock(), io::stdout());
                    workspace.edit(&pattern, &mut prompt)?
                }
            };
            write_report(&mut out, &report, &pattern)?;
        }
        Commands::Shell => {
            let mut workspace = Workspace::open(config)?;
            Shell::new(io::stdin().lock(), io::stdout()).run(&mut workspace)?;
        }
        Commands::Serve => {
            let mut host = ToolHost::new(Workspace::open(config)?);
            serve(&mut host, io::stdin().lock(), io::stdout().lock())?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "linesweep=debug" } else { "linesweep=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init().ok();
}

pub(crate) fn write_search<W: Write>(out: &mut W, outcome: &SearchOutcome, pattern: &str) -> Result<()> {
    match outcome {
        SearchOutcome::File { name, path } => {
            writeln!(out, "'{}' is a file located at: {}", name, path.display())?;
        }
        SearchOutcome::Matches(matches) if matches.is_empty() => {
            writeln!(out, "'{}' not found in any files.", pattern)?;
        }
        SearchOutcome::Matches(matches) => {
            for m in matches {
                writeln!(out, "{}", m)?;
            }
        }
    }
    Ok(())
}

pub(crate) fn write_report<W: Write>(out: &mut W, report: &EditReport, pattern: &str) -> Result<()> {
    if report.no_matches() {
        writeln!(out, "No matches found for '{}'", pattern)?;
        return Ok(());
    }

    for outcome in &report.outcomes {
        writeln!(out, "{}", outcome)?;
    }

    if report.outcomes.is_empty() && !report.stopped {
        writeln!(out, "All matches for '{}' were already handled", pattern)?;
        return Ok(());
    }

    writeln!(
        out,
        "{} updated, {} skipped, {} already handled",
        report.updated_count(),
        report.skipped_count(),
        report.already_handled
    )?;
    if report.stopped {
        writeln!(out, "Stopped early; remaining matches are left for the next run")?;
    }
    Ok(())
}

fn write_history<W: Write>(
    out: &mut W,
    history: &EditHistory,
    status: Option<HistoryStatus>,
) -> Result<()> {
    let statuses = match status {
        Some(status) => vec![status],
        None => vec![HistoryStatus::Updated, HistoryStatus::Skipped],
    };

    for status in statuses {
        let records = history.records(status);
        writeln!(out, "{} ({}):", status, records.len())?;
        for record in records {
            match &record.new_content {
                Some(new_content) => writeln!(
                    out,
                    "  {}, line {}: {} -> {}",
                    record.file, record.line_number, record.line_content, new_content
                )?,
                None => writeln!(
                    out,
                    "  {}, line {}: {}",
                    record.file, record.line_number, record.line_content
                )?,
            }
        }
    }
    Ok(())
}
