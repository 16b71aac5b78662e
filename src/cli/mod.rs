//! CLI module
//!
//! Provides the command-line interface:
//! - start: load configuration and serve HTTP

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, start};
pub use errors::{CliError, CliResult};
