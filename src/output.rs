//! Output writers for sorted version lists.

use crate::error::{Result, VsortError};
use std::io::Write;

/// Write one version per line, each newline-terminated.
pub fn write_lines<W: Write>(writer: &mut W, versions: &[String]) -> Result<()> {
    for version in versions {
        writeln!(writer, "{}", version).map_err(output_error)?;
    }
    Ok(())
}

/// Write the compact JSON encoding of the list, with no trailing newline.
pub fn write_json<W: Write>(writer: &mut W, versions: &[String]) -> Result<()> {
    let encoded =
        serde_json::to_string(versions).map_err(|e| VsortError::OutputError(e.to_string()))?;
    write!(writer, "{}", encoded).map_err(output_error)
}

fn output_error(err: std::io::Error) -> VsortError {
    VsortError::OutputError(err.to_string())
}
