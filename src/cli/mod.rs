//! CLI module for recordfile
//!
//! Provides command-line interface for:
//! - check: Load a file and report counts
//! - get: Print one record
//! - lookup: Find a record by indexed value
//! - rows: Print retained rows without decoding

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, FormatArgs, SourceArgs};
pub use commands::{check, get, lookup, rows, run, run_command};
pub use errors::{CliError, CliResult};
pub use io::{write_error, write_response};
