//! Ripple service command-line entry point.
//!
//! This module provides the main entry point for running the Ripple service
//! as a standalone process.

use clap::Parser;
use tracing::info;

use ripple_service::{options::CliOptions, start_service};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let cli_opts = CliOptions::parse();

    // Convert to service options
    let service_opts = cli_opts
        .into_service_options()
        .map_err(|e| format!("Failed to parse options: {}", e))?;

    // Serve until the transport fails or the process is interrupted
    tokio::select! {
        result = start_service(service_opts) => result?,
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, shutting down");
        }
    }

    Ok(())
}
