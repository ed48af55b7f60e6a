//! # CLI Module
//!
//! clap command definitions and command handlers. Handlers are plain
//! functions over the core pipeline so integration tests can drive them
//! without spawning a process.

use std::net::SocketAddr;
use std::path::Path;

use clap::{Parser, Subcommand};
use quickscan_core::{ImagePayload, ScanReport, Scanner};
use thiserror::Error;

/// Quickscan: barcode scanning over files, data URLs and HTTP.
#[derive(Debug, Parser)]
#[command(name = "quickscan", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decode a single image and print the completion report.
    Scan {
        /// File path, or a literal `data:` URL as produced by a browser host.
        input: String,
        /// Emit the report as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Run the HTTP scanning API.
    Serve {
        /// Listen address.
        #[arg(long, env = "QUICKSCAN_ADDR", default_value = "127.0.0.1:8080")]
        addr: SocketAddr,
    },
}

/// CLI-surface failures. Scan failures are not among them: those travel
/// inside the report.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("cannot serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Resolve a CLI input argument into a scan payload.
///
/// Anything that starts with `data:` is treated as an inline data URL;
/// everything else is read from disk as raw image bytes.
pub fn read_payload(input: &str) -> Result<ImagePayload, CliError> {
    if input.starts_with("data:") {
        return Ok(ImagePayload::from_data_url(input));
    }
    let bytes = std::fs::read(Path::new(input)).map_err(|source| CliError::Read {
        path: input.to_string(),
        source,
    })?;
    Ok(ImagePayload::from_bytes(bytes))
}

/// Execute the `scan` command.
///
/// Prints the report and returns it, so the caller can derive the process
/// exit code from `success`.
pub fn cmd_scan(input: &str, json: bool) -> Result<ScanReport, CliError> {
    let payload = read_payload(input)?;
    let report = Scanner::new().scan_report(&payload);

    if !report.success {
        tracing::debug!(
            error = report.error.as_deref().unwrap_or("unknown"),
            "scan failed"
        );
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.to_text());
    }
    Ok(report)
}
