//! Command-line surface: one-shot subcommands, the interactive shell and the
//! interactive replacement prompt.

pub mod commands;
pub mod prompt;
pub mod shell;

pub use commands::{Cli, Commands, run};
pub use prompt::Prompt;
pub use shell::Shell;
