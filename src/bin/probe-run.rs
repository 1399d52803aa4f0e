//! Command-line front end: reads a JSON run spec and prints the JSON run report.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use grid_probe::{Facing, RunReport, RunSpec};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Path to a JSON run spec. Reads stdin when omitted.
    #[arg(value_name = "SPEC")]
    spec: Option<PathBuf>,

    /// Override the start facing from the spec (NORTH, SOUTH, EAST, WEST, UP, DOWN).
    #[arg(long, value_name = "FACING")]
    facing: Option<Facing>,

    /// Pretty-print the JSON report.
    #[arg(long)]
    pretty: bool,

    /// Print only the one-line summary instead of the JSON report.
    #[arg(long, conflicts_with = "pretty")]
    summary: bool,
}

fn parse_spec(reader: impl Read) -> Result<RunSpec> {
    serde_json::from_reader(reader).context("malformed run spec")
}

fn read_spec(path: Option<&PathBuf>) -> Result<RunSpec> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            parse_spec(BufReader::new(file))
        }
        None => parse_spec(io::stdin().lock()),
    }
}

fn render(args: &CliArgs, report: &RunReport) -> Result<String> {
    if args.summary {
        Ok(report.summary.clone())
    } else if args.pretty {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(serde_json::to_string(report)?)
    }
}

fn run(args: &CliArgs) -> Result<String> {
    let mut spec = read_spec(args.spec.as_ref())?;
    if let Some(facing) = args.facing {
        spec.direction = Some(facing);
    }

    let report = spec.run().context("run rejected")?;
    render(args, &report)
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
