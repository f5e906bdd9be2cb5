//! CLI entrypoint for the strscan conformance harness.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use strscan_harness::fixtures::{self, FixtureSet};
use strscan_harness::log::{LogEmitter, LogEntry, LogLevel, Outcome};
use strscan_harness::report::ConformanceReport;
use strscan_harness::runner::TestRunner;

/// Conformance tooling for the strscan primitives.
#[derive(Debug, Parser)]
#[command(name = "strscan-harness")]
#[command(about = "Conformance harness for the strscan primitives")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the builtin fixture set as golden JSON.
    Capture {
        /// Output path for fixture JSON.
        #[arg(long)]
        output: PathBuf,
    },
    /// Run fixtures against the implementation.
    Verify {
        /// Fixture JSON path (builtin set when omitted).
        #[arg(long)]
        fixture: Option<PathBuf>,
        /// Output report path (markdown).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Structured JSONL log path.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Campaign name recorded in the report.
        #[arg(long, default_value = "local")]
        campaign: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("harness error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<bool, Box<dyn std::error::Error>> {
    match command {
        Command::Capture { output } => {
            let set = fixtures::builtin();
            std::fs::write(&output, set.to_json()?)?;
            println!("wrote {} cases to {}", set.cases.len(), output.display());
            Ok(true)
        }
        Command::Verify {
            fixture,
            report,
            log,
            campaign,
        } => {
            let set = match fixture {
                Some(path) => FixtureSet::from_file(&path)?,
                None => fixtures::builtin(),
            };
            let results = TestRunner::new(campaign.clone()).run(&set);

            let mut emitter = match log {
                Some(path) => Some(LogEmitter::file(&path)?),
                None => None,
            };
            if let Some(emitter) = emitter.as_mut() {
                emitter.emit(&LogEntry::new(&campaign, LogLevel::Info, "run_start"))?;
            }

            for result in &results {
                if result.passed {
                    println!("{} - OK", result.case_name);
                } else {
                    eprintln!("{} - failed", result.case_name);
                    if let Some(diff) = &result.diff {
                        eprintln!("{diff}");
                    }
                }
                if let Some(emitter) = emitter.as_mut() {
                    let outcome = if result.passed {
                        Outcome::Pass
                    } else if result.actual.starts_with("error:") {
                        Outcome::Error
                    } else {
                        Outcome::Fail
                    };
                    let level = if result.passed {
                        LogLevel::Info
                    } else {
                        LogLevel::Error
                    };
                    emitter.emit(
                        &LogEntry::new(&campaign, level, "case_done")
                            .with_case(&result.case_name)
                            .with_outcome(outcome),
                    )?;
                }
            }

            let summary = ConformanceReport::from_results(campaign, &results);
            println!(
                "{}: {}/{} passed",
                summary.campaign, summary.passed, summary.total
            );
            if let Some(path) = report {
                std::fs::write(&path, summary.to_markdown())?;
            }
            Ok(summary.all_passed())
        }
    }
}
