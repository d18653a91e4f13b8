#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod cli;
mod prelude;
mod report;
mod uptime;

use std::{fs, io, process::ExitCode};

use clap::{Parser, crate_version, error::ErrorKind};
use tracing_subscriber::EnvFilter;

use crate::{cli::Args, prelude::*, report::Report};

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .without_time()
        .compact()
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error)
            if matches!(error.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) =>
        {
            let _ = error.print();
            return ExitCode::SUCCESS;
        }
        Err(error) => return fail(&Error::new(error)),
    };
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => fail(&error),
    }
}

fn run(args: &Args) -> Result {
    info!(version = crate_version!(), "starting…");
    let content = fs::read_to_string(&args.input_file)
        .with_context(|| format!("failed to read `{}`", args.input_file.display()))?;
    let report = Report::parse(&content)?;
    info!(
        n_stations = report.stations.len(),
        n_chargers = report.availability.len(),
        "parsed the report",
    );
    for (station_id, uptime) in uptime::calculate(&report) {
        println!("{station_id} {uptime}");
    }
    info!("done!");
    Ok(())
}

/// The failure contract: stdout gets exactly the `ERROR` marker, the
/// diagnostic goes to the error stream, and the exit status is 1.
fn fail(error: &Error) -> ExitCode {
    println!("ERROR");
    error!("{error:#}");
    ExitCode::FAILURE
}
