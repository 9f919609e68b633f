//! Configuration options for the Ripple service.
//!
//! This module defines the command-line options and their conversion into
//! the service configuration.

use clap::Parser;

use crate::{LogLevel, ServiceOptions};

/// Command-line arguments for the Ripple service.
#[derive(Parser, Debug)]
#[command(author, version, about = "ZeroMQ sine-wave transform service")]
pub struct CliOptions {
    /// Endpoint to bind the reply socket to
    #[arg(short, long, default_value = "tcp://127.0.0.1:7070")]
    pub endpoint: String,

    /// Log at debug verbosity
    #[arg(long, conflicts_with = "quiet")]
    pub debug: bool,

    /// Log errors only
    #[arg(long)]
    pub quiet: bool,
}

impl CliOptions {
    /// Convert CLI options to ServiceOptions
    pub fn into_service_options(self) -> Result<ServiceOptions, String> {
        if !self.endpoint.contains("://") {
            return Err(format!(
                "Invalid endpoint '{}': expected a scheme like tcp://host:port",
                self.endpoint
            ));
        }

        let log_level = if self.debug {
            LogLevel::Debug
        } else if self.quiet {
            LogLevel::Quiet
        } else {
            LogLevel::Normal
        };

        Ok(ServiceOptions {
            endpoint: self.endpoint,
            init_tracing: true,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_the_well_known_port() {
        let options = CliOptions::parse_from(["ripple-service"])
            .into_service_options()
            .expect("defaults are valid");

        assert_eq!(options.endpoint, "tcp://127.0.0.1:7070");
        assert_eq!(options.log_level, LogLevel::Normal);
        assert!(options.init_tracing);
    }

    #[test]
    fn schemeless_endpoint_is_rejected() {
        let err = CliOptions::parse_from(["ripple-service", "--endpoint", "127.0.0.1:7070"])
            .into_service_options()
            .expect_err("scheme is required");

        assert!(err.contains("Invalid endpoint"));
    }

    #[test]
    fn quiet_flag_lowers_the_log_level() {
        let options = CliOptions::parse_from(["ripple-service", "--quiet"])
            .into_service_options()
            .expect("quiet is valid");

        assert_eq!(options.log_level, LogLevel::Quiet);
    }
}
