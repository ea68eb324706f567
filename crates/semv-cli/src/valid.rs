//! Valid command - check version strings.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

use crate::config::{OutputFormat, SemvConfig};
use crate::output::write_json;

#[derive(Args, Debug)]
pub struct ValidArgs {
    /// Version strings to check
    #[arg(required = true)]
    pub versions: Vec<String>,

    /// Only set the exit code
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    version: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn execute<W: Write>(args: ValidArgs, config: &SemvConfig, out: &mut W) -> Result<i32> {
    let reports: Vec<Report> = args
        .versions
        .iter()
        .map(|version| {
            let error = semv::parse(version).err().map(|e| e.to_string());
            Report {
                version,
                valid: error.is_none(),
                error,
            }
        })
        .collect();

    let invalid = reports.iter().filter(|r| !r.valid).count();
    log::debug!("{} of {} versions invalid", invalid, reports.len());

    if !args.quiet {
        match config.output.format {
            OutputFormat::Json => write_json(out, &reports)?,
            OutputFormat::Plain => {
                for report in &reports {
                    match &report.error {
                        None => writeln!(out, "{} {}", "valid".green(), report.version)?,
                        Some(error) => {
                            writeln!(out, "{} {} ({})", "invalid".red(), report.version, error)?
                        }
                    }
                }
            }
        }
    }

    Ok(if invalid == 0 { 0 } else { 1 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(versions: &[&str], quiet: bool) -> ValidArgs {
        ValidArgs {
            versions: versions.iter().map(|v| v.to_string()).collect(),
            quiet,
        }
    }

    #[test]
    fn test_all_valid() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let code = execute(
            args(&["1.0.0", "1.0.0-alpha+001"], false),
            &SemvConfig::default(),
            &mut out,
        )
        .unwrap();
        assert_eq!(code, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "valid 1.0.0\nvalid 1.0.0-alpha+001\n");
    }

    #[test]
    fn test_invalid_sets_exit_code() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let code =
            execute(args(&["1.0.0", "1b.0.0"], false), &SemvConfig::default(), &mut out).unwrap();
        assert_eq!(code, 1);
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains(
            "invalid 1b.0.0 (Invalid semver syntax \"1b.0.0\": major is not a non-negative integer)"
        ));
    }

    #[test]
    fn test_quiet() {
        let mut out = Vec::new();
        let code = execute(args(&["1..0"], true), &SemvConfig::default(), &mut out).unwrap();
        assert_eq!(code, 1);
        assert!(out.is_empty());
    }

    #[test]
    fn test_json_report() {
        let mut config = SemvConfig::default();
        config.output.format = OutputFormat::Json;
        let mut out = Vec::new();
        execute(args(&["1.0.0", "1.0"], false), &config, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["valid"], true);
        assert!(value[0].get("error").is_none());
        assert_eq!(value[1]["valid"], false);
        assert_eq!(value[1]["version"], "1.0");
    }
}
