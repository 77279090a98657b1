//! CLI argument definitions using clap
//!
//! Commands:
//! - recordfile check --schema <shape.json> --data <file>
//! - recordfile get --schema <shape.json> --data <file> --row <n>
//! - recordfile lookup --schema <shape.json> --data <file> --key <token>
//! - recordfile rows --data <file>

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// recordfile - schema-checked loader for delimited record files
#[derive(Parser, Debug)]
#[command(name = "recordfile")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log load lifecycle events to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Format overrides shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct FormatArgs {
    /// JSON file with field_delimiter / comment_marker / line_terminator
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Field delimiter
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Comment marker
    #[arg(long)]
    pub comment: Option<String>,

    /// Row terminator; `\n`, `\r`, `\t` and `\\` escapes are expanded
    #[arg(long)]
    pub line_end: Option<String>,
}

/// Schema and data file for commands that decode records
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Path to the representative shape (JSON)
    #[arg(long)]
    pub schema: PathBuf,

    /// Path to the record file
    #[arg(long)]
    pub data: PathBuf,

    #[command(flatten)]
    pub format: FormatArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a file and report record and index counts
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print one record as a JSON object
    Get {
        #[command(flatten)]
        source: SourceArgs,

        /// Zero-based record position
        #[arg(long)]
        row: usize,
    },

    /// Look up a record by indexed value
    Lookup {
        #[command(flatten)]
        source: SourceArgs,

        /// Key token, decoded with the indexed field's kind
        #[arg(long)]
        key: String,

        /// Index slot (declaration order among indexed fields)
        #[arg(long, default_value_t = 0)]
        slot: usize,
    },

    /// Print every retained row, header included, without decoding
    Rows {
        /// Path to the record file
        #[arg(long)]
        data: PathBuf,

        #[command(flatten)]
        format: FormatArgs,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lookup() {
        let cli = Cli::try_parse_from([
            "recordfile",
            "lookup",
            "--schema",
            "s.json",
            "--data",
            "d.txt",
            "--key",
            "30",
            "--delimiter",
            ",",
        ])
        .unwrap();

        match cli.command {
            Command::Lookup { source, key, slot } => {
                assert_eq!(key, "30");
                assert_eq!(slot, 0);
                assert_eq!(source.format.delimiter.as_deref(), Some(","));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["recordfile", "rows", "--data", "d.txt", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_get_requires_row() {
        assert!(Cli::try_parse_from(["recordfile", "get", "--schema", "s", "--data", "d"]).is_err());
    }
}
