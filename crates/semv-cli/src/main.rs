mod check;
mod compare;
mod config;
mod output;
mod parse;
mod sort;
mod valid;

use config::{OutputFormat, SemvConfig};

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::io::{self, Write};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "semv")]
#[command(about = "Parse, compare and sort semantic versions")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format (overrides semv.toml)
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the fields of a version
    Parse(parse::ParseArgs),

    /// Check whether strings are valid versions
    Valid(valid::ValidArgs),

    /// Print -1, 0 or 1 depending on the precedence of two versions
    Compare(compare::CompareArgs),

    /// Evaluate an operator between two versions (exit 0 when it holds)
    Check(check::CheckArgs),

    /// Sort versions in ascending order
    Sort(sort::SortArgs),
}

fn init_logger(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.format_timestamp(None).init();
}

/// Merge CLI flags over the configuration file
fn build_config(args: &Args) -> Result<SemvConfig> {
    let mut config = SemvConfig::load_from_cwd()?.unwrap_or_default();

    if let Some(format) = args.format {
        config.output.format = format;
    }
    if args.no_color {
        config.output.color = false;
    }

    Ok(config)
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = build_config(&args)?;
    if !config.output.color {
        colored::control::set_override(false);
    }
    log::debug!("Running {:?}", args.command);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let code = match args.command {
        Commands::Parse(args) => parse::execute(args, &config, &mut out)?,
        Commands::Valid(args) => valid::execute(args, &config, &mut out)?,
        Commands::Compare(args) => compare::execute(args, &config, &mut out)?,
        Commands::Check(args) => check::execute(args, &config, &mut out)?,
        Commands::Sort(args) => sort::execute(args, &config, io::stdin().lock(), &mut out)?,
    };

    out.flush()?;
    Ok(code)
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}
