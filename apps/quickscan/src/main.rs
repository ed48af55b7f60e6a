//! Quickscan binary entry point.

use std::process::ExitCode;

use clap::Parser;
use quickscan::api;
use quickscan::cli::{cmd_scan, Cli, Command};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Scan { input, json } => match cmd_scan(&input, json) {
            // Exit code mirrors the report, so shell callers can branch
            // without parsing output.
            Ok(report) if report.success => ExitCode::SUCCESS,
            Ok(_) => ExitCode::FAILURE,
            Err(err) => {
                tracing::error!(%err, "scan command failed");
                ExitCode::FAILURE
            }
        },
        Command::Serve { addr } => match api::serve(addr).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                tracing::error!(%err, "server terminated");
                ExitCode::FAILURE
            }
        },
    }
}
