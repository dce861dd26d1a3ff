//! relcheck - release documentation consistency checker
//!
//! This tool gates a release on three files agreeing with each other:
//! - Cargo.toml declares the crate version and the tracked dependency versions
//! - README.md must carry a compatibility table row for those versions
//! - CHANGELOG.md must no longer contain an [Unreleased] section

use clap::Parser;
use relcheck::cli::CliArgs;
use relcheck::orchestrator::Orchestrator;
use relcheck::output::{create_formatter, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Run the main logic and handle errors
    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    // Print version info in verbose mode
    if args.verbose {
        eprintln!("relcheck v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Target: {}", args.path.display());
    }

    // Run the checks
    let orchestrator = Orchestrator::new(args.clone());
    let report = orchestrator.run()?;

    // Create output formatter based on CLI options
    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet);
    let formatter = create_formatter(output_config);

    // Output results
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    formatter.format(&report, &mut stdout, &mut stderr)?;
    stdout.flush()?;

    // The report verdict gates the exit status
    if report.passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
