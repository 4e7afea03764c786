//! Command implementation for vsort.
//!
//! The run pipeline: collect versions from the input sources, construct
//! the sorter from CLI options, drop invalid entries (or fail, under
//! --strict), sort, and emit in the selected output format.

use crate::cli::{Cli, Format};
use crate::error::{Result, VsortError};
use crate::input;
use crate::output;
use crate::sorter::{Order, SortOption, VersionSorter};
use std::io::Write;

/// Run the sort pipeline, writing to standard output.
pub fn run(cli: Cli) -> Result<()> {
    let stdout = std::io::stdout();
    run_to(cli, &mut stdout.lock())
}

fn run_to<W: Write>(cli: Cli, writer: &mut W) -> Result<()> {
    let versions = input::collect_versions(&cli.files, cli.input)?;

    let sorter = VersionSorter::new(&sort_options(&cli))?;

    let mut validated = Vec::with_capacity(versions.len());
    for version in versions {
        if sorter.is_valid(&version) {
            validated.push(version);
        } else if cli.strict {
            return Err(VsortError::StrictViolation(version));
        }
    }

    sorter.sort(&mut validated);

    match cli.output {
        Format::Lines => output::write_lines(writer, &validated),
        Format::Json => output::write_json(writer, &validated),
    }
}

/// Translate CLI flags into sorter option directives.
///
/// The prefix is always applied (the empty default anchors at the start
/// and strips nothing); the suffix only when present and non-empty.
fn sort_options(cli: &Cli) -> Vec<SortOption> {
    let order = if cli.reverse { Order::Desc } else { Order::Asc };
    let mut options = vec![
        SortOption::Order(order),
        SortOption::Prefix(cli.prefix.clone()),
        SortOption::Level(cli.level),
    ];
    if let Some(suffix) = cli.suffix.as_deref().filter(|s| !s.is_empty()) {
        options.push(SortOption::Suffix(suffix.to_string()));
    }
    options
}
