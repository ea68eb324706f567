//! Parse command - show the fields of a version.

use anyhow::Result;
use clap::Args;
use serde_json::json;
use std::io::Write;

use crate::config::{OutputFormat, SemvConfig};
use crate::output::{number_value, write_json};

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Version string to parse
    pub version: String,
}

pub fn execute<W: Write>(args: ParseArgs, config: &SemvConfig, out: &mut W) -> Result<i32> {
    let version = semv::parse(&args.version)?;

    match config.output.format {
        OutputFormat::Json => write_json(
            out,
            &json!({
                "version": version.to_string(),
                "major": number_value(version.major()),
                "minor": number_value(version.minor()),
                "patch": number_value(version.patch()),
                "pre_release": version.pre_release(),
                "build_metadata": version.build_metadata(),
                "is_pre_release": version.is_pre_release(),
            }),
        )?,
        OutputFormat::Plain => {
            writeln!(out, "version:        {}", version)?;
            writeln!(out, "major:          {}", version.major())?;
            writeln!(out, "minor:          {}", version.minor())?;
            writeln!(out, "patch:          {}", version.patch())?;
            writeln!(out, "pre-release:    {}", version.pre_release())?;
            writeln!(out, "build metadata: {}", version.build_metadata())?;
        }
    }

    Ok(0)
}
