//! recordfile CLI entry point
//!
//! Parses arguments and dispatches through `cli::run`. Failures are
//! printed as a JSON error object and exit with status 1.

use recordfile::cli;

fn main() {
    if let Err(e) = cli::run() {
        if cli::write_error(e.code(), &e.to_string()).is_err() {
            eprintln!("{}", e);
        }
        std::process::exit(1);
    }
}
