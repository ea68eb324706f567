//! Compare command - print the precedence of two versions as -1, 0 or 1.

use anyhow::Result;
use clap::Args;
use serde_json::json;
use std::cmp::Ordering;
use std::io::Write;

use crate::config::{OutputFormat, SemvConfig};
use crate::output::write_json;

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Left-hand version
    pub left: String,

    /// Right-hand version
    pub right: String,
}

pub fn execute<W: Write>(args: CompareArgs, config: &SemvConfig, out: &mut W) -> Result<i32> {
    let ordering = semv::compare_strings(&args.left, &args.right)?;
    let result = match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    };

    match config.output.format {
        OutputFormat::Json => write_json(
            out,
            &json!({
                "left": args.left,
                "right": args.right,
                "result": result,
            }),
        )?,
        OutputFormat::Plain => writeln!(out, "{}", result)?,
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(left: &str, right: &str) -> Result<String> {
        let mut out = Vec::new();
        let args = CompareArgs {
            left: left.to_string(),
            right: right.to_string(),
        };
        execute(args, &SemvConfig::default(), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_compare() {
        assert_eq!(run("1.0.0-alpha", "1.0.0-alpha.1").unwrap(), "-1\n");
        assert_eq!(run("1.2.3+a", "1.2.3+b").unwrap(), "0\n");
        assert_eq!(run("1.0.0-beta.11", "1.0.0-beta.2").unwrap(), "1\n");
    }

    #[test]
    fn test_compare_invalid() {
        let err = run("1.0.0", "1.0-b").unwrap_err();
        assert!(err.to_string().contains("\"1.0-b\""));
    }

    #[test]
    fn test_compare_json() {
        let mut config = SemvConfig::default();
        config.output.format = OutputFormat::Json;
        let mut out = Vec::new();
        let args = CompareArgs {
            left: "2.0.0".to_string(),
            right: "1.0.0".to_string(),
        };
        execute(args, &config, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["result"], 1);
        assert_eq!(value["left"], "2.0.0");
    }
}
