//! Ripple service implementation.
//!
//! This crate provides a ZeroMQ REP server that applies the sine-wave
//! transform from `ripple-core` to each inbound request and replies with
//! the updated position list. The service acts as a compute endpoint for
//! clients that offload the displacement of their geometry.

pub mod options;
pub mod request_handler;
pub mod server;

use ripple_core::RippleError;
use thiserror::Error;

/// Error type for Ripple service operations
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Transport error: {0}")]
    Transport(#[from] zeromq::ZmqError),

    #[error(transparent)]
    Core(#[from] RippleError),

    #[error("Server error: {0}")]
    Server(String),
}

/// Type alias for service results
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Log verbosity selected for the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Normal,
    Quiet,
}

/// Configuration options for the Ripple service.
#[derive(Debug, Clone)]
pub struct ServiceOptions {
    /// Endpoint to bind the reply socket to
    pub endpoint: String,

    /// Whether to install the tracing subscriber on startup
    pub init_tracing: bool,

    /// Log verbosity used when the subscriber is installed
    pub log_level: LogLevel,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            endpoint: "tcp://127.0.0.1:7070".to_string(),
            init_tracing: false,
            log_level: LogLevel::Normal,
        }
    }
}

/// Start the Ripple service with the given options.
///
/// This is the main entry point for starting the service programmatically.
/// It returns when the transport fails; request-level failures are answered
/// on the wire and never end the loop.
pub async fn start_service(options: ServiceOptions) -> Result<()> {
    server::run_server(options).await
}
