//! `sensorstat`: generate one telemetry run and print its report
//!
//! ```bash
//! sensorstat                            # seed 1, random reading count
//! sensorstat --seed 7 --readings 100000
//! sensorstat --config run.json --json
//! RUST_LOG=sensorstat_core=debug sensorstat
//! ```

mod cli;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use sensorstat_core::{SeededSource, TelemetryRun};
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, JsonReport};

fn main() -> ExitCode {
    init_logging();

    match run(Args::parse()) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{:#}", err);
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Build the complete output before printing anything, so a failure never
/// leaves a partial report on stdout.
fn run(args: Args) -> Result<String> {
    let config = args.run_config()?;
    tracing::info!(seed = config.seed, readings = ?config.reading_count, "starting run");

    let run = TelemetryRun::execute(&config, SeededSource::new(config.seed))
        .context("telemetry run failed")?;

    if args.json {
        serde_json::to_string_pretty(&JsonReport::new(config.seed, &run))
            .context("failed to serialize report")
    } else {
        Ok(run.to_string())
    }
}

fn init_logging() {
    // Diagnostics go to stderr so stdout carries only the report. The `log`
    // records emitted by sensorstat-core are bridged by the subscriber.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
