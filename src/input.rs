//! Input readers for version lists.
//!
//! Versions arrive either as newline-separated text or as a JSON array of
//! strings, from one or more files or from standard input. Multiple
//! sources are read in argument order and concatenated; sorting happens
//! later, over the combined list.

use crate::cli::Format;
use crate::error::{Result, VsortError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

/// Source name used in error messages when reading standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// Read all versions from the given files, or from stdin when none are
/// given.
pub fn collect_versions(files: &[PathBuf], format: Format) -> Result<Vec<String>> {
    if files.is_empty() {
        let stdin = std::io::stdin();
        return read_source(stdin.lock(), format, STDIN_NAME);
    }

    let mut versions = Vec::new();
    for path in files {
        let name = path.display().to_string();
        let file = File::open(path).map_err(|e| input_error(&name, e))?;
        versions.extend(read_source(BufReader::new(file), format, &name)?);
    }
    Ok(versions)
}

fn read_source<R: BufRead>(reader: R, format: Format, name: &str) -> Result<Vec<String>> {
    match format {
        Format::Lines => read_lines(reader, name),
        Format::Json => read_json(reader, name),
    }
}

/// Read newline-separated entries. A trailing newline is not required.
fn read_lines<R: BufRead>(reader: R, name: &str) -> Result<Vec<String>> {
    reader
        .lines()
        .map(|line| line.map_err(|e| input_error(name, e)))
        .collect()
}

/// Decode a JSON array of strings.
fn read_json<R: BufRead>(mut reader: R, name: &str) -> Result<Vec<String>> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .map_err(|e| input_error(name, e))?;
    serde_json::from_str(&raw).map_err(|e| input_error(name, e))
}

fn input_error(name: &str, err: impl std::fmt::Display) -> VsortError {
    VsortError::InputError {
        source_name: name.to_string(),
        reason: err.to_string(),
    }
}
