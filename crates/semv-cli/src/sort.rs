//! Sort command - sort versions given as arguments or on stdin.

use anyhow::{Context, Result};
use clap::Args;
use std::io::{BufRead, Write};

use semv::Semver;

use crate::config::{OutputFormat, SemvConfig};
use crate::output::write_json;

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Versions to sort (read one per line from stdin when omitted)
    pub versions: Vec<String>,

    /// Sort in descending order
    #[arg(short, long)]
    pub reverse: bool,
}

pub fn execute<R: BufRead, W: Write>(
    args: SortArgs,
    config: &SemvConfig,
    input: R,
    out: &mut W,
) -> Result<i32> {
    let mut versions = if args.versions.is_empty() {
        log::debug!("Reading versions from stdin");
        read_versions(input)?
    } else {
        args.versions
    };

    if args.reverse || config.sort.reverse {
        Semver::rsort_strings(&mut versions)?;
    } else {
        Semver::sort_strings(&mut versions)?;
    }

    match config.output.format {
        OutputFormat::Json => write_json(out, &versions)?,
        OutputFormat::Plain => {
            for version in &versions {
                writeln!(out, "{}", version)?;
            }
        }
    }

    Ok(0)
}

/// One version per line; surrounding whitespace and blank lines are ignored.
fn read_versions<R: BufRead>(input: R) -> Result<Vec<String>> {
    let mut versions = Vec::new();
    for line in input.lines() {
        let line = line.context("Failed to read versions from stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            versions.push(trimmed.to_string());
        }
    }
    Ok(versions)
}
