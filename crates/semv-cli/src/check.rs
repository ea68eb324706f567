//! Check command - evaluate an operator between two versions.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde_json::json;
use std::io::Write;

use semv::{Operator, Semver};

use crate::config::{OutputFormat, SemvConfig};
use crate::output::write_json;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Left-hand version
    pub left: String,

    /// Operator: ==, !=, <, <=, >, >= (or eq, ne, lt, le, gt, ge)
    pub operator: Operator,

    /// Right-hand version
    pub right: String,

    /// Only set the exit code
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn execute<W: Write>(args: CheckArgs, config: &SemvConfig, out: &mut W) -> Result<i32> {
    let holds = Semver::check(&args.left, args.operator, &args.right)?;
    log::debug!("{} {} {} is {}", args.left, args.operator, args.right, holds);

    if !args.quiet {
        match config.output.format {
            OutputFormat::Json => write_json(
                out,
                &json!({
                    "left": args.left,
                    "operator": args.operator.as_str(),
                    "right": args.right,
                    "result": holds,
                }),
            )?,
            OutputFormat::Plain => {
                let verdict = if holds { "true".green() } else { "false".red() };
                writeln!(out, "{}", verdict)?;
            }
        }
    }

    Ok(if holds { 0 } else { 1 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(left: &str, operator: Operator, right: &str) -> CheckArgs {
        CheckArgs {
            left: left.to_string(),
            operator,
            right: right.to_string(),
            quiet: false,
        }
    }

    #[test]
    fn test_check_holds() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let check = args("1.0.0-rc.1", Operator::LessThan, "1.0.0");
        let code = execute(check, &SemvConfig::default(), &mut out).unwrap();
        assert_eq!(code, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "true\n");
    }

    #[test]
    fn test_check_fails() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let check = args("2.0.0", Operator::LessThanOrEqual, "1.0.0");
        let code = execute(check, &SemvConfig::default(), &mut out).unwrap();
        assert_eq!(code, 1);
        assert_eq!(String::from_utf8(out).unwrap(), "false\n");
    }

    #[test]
    fn test_check_equal_ignores_build_metadata() {
        let mut out = Vec::new();
        let mut check = args("1.0.0", Operator::Equal, "1.0.0+1231456");
        check.quiet = true;
        assert_eq!(execute(check, &SemvConfig::default(), &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_check_invalid_version() {
        let mut out = Vec::new();
        let check = args("1..0", Operator::Equal, "1.0.0");
        assert!(execute(check, &SemvConfig::default(), &mut out).is_err());
    }
}
