//! CLI argument parsing for vsort.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module only defines the option surface; the run pipeline lives in
//! the `commands` module.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Vsort: sort version-like strings in ascending or descending order.
///
/// Versions are read from the given files (or standard input when no file
/// is given), validated, sorted, and written to standard output. Entries
/// that do not parse as versions are silently dropped unless --strict is
/// given.
#[derive(Parser, Debug)]
#[command(name = "vsort")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Files to read versions from. Reads standard input when omitted.
    pub files: Vec<PathBuf>,

    /// Input format.
    #[arg(short, long, value_enum, default_value_t = Format::Lines)]
    pub input: Format,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Lines)]
    pub output: Format,

    /// Sort in reverse (descending) order.
    #[arg(short, long)]
    pub reverse: bool,

    /// Expected prefix pattern of version strings, stripped before
    /// comparison.
    #[arg(short, long, default_value = "")]
    pub prefix: String,

    /// Expected suffix pattern of version strings, stripped before
    /// comparison.
    #[arg(short, long, allow_hyphen_values = true)]
    pub suffix: Option<String>,

    /// Expected number of dot-separated version components (-1 for no
    /// limit).
    #[arg(short = 'L', long, default_value_t = -1, allow_hyphen_values = true)]
    pub level: i32,

    /// Fail when an invalid version is encountered instead of dropping it.
    #[arg(long)]
    pub strict: bool,
}

/// Input/output encodings for the version list.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// One version per line.
    Lines,
    /// A JSON array of strings.
    Json,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Lines => write!(f, "lines"),
            Format::Json => write!(f, "json"),
        }
    }
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
