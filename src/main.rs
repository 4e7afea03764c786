//! Vsort: sort version-like strings from files or standard input.
//!
//! This is the main entry point for the `vsort` CLI. It parses arguments,
//! runs the sort pipeline, and handles errors with proper exit codes.

mod cli;
mod commands;
pub mod error;
pub mod exit_codes;
mod input;
mod output;
pub mod sorter;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::run(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
