//! ZeroMQ server implementation for the Ripple service.
//!
//! This module owns the reply socket and the serve loop: one request is
//! received, transformed, and answered at a time. REP semantics serialize
//! concurrent clients, so there is no queueing or backpressure policy here.

use tracing::{error, info};
use zeromq::{Socket, SocketRecv, SocketSend, ZmqMessage};

use crate::{request_handler, LogLevel, Result, ServiceError, ServiceOptions};

/// A bound reply socket together with its resolved endpoint.
pub struct WaveServer {
    socket: zeromq::RepSocket,
    endpoint: String,
}

impl WaveServer {
    /// Bind the reply socket at the configured endpoint.
    ///
    /// Binding to port 0 works; the resolved endpoint is available through
    /// [`WaveServer::endpoint`] afterwards, which lets tests and embedding
    /// callers serve on an ephemeral port.
    pub async fn bind(options: &ServiceOptions) -> Result<Self> {
        let mut socket = zeromq::RepSocket::new();
        let endpoint = socket.bind(&options.endpoint).await.map_err(|e| {
            ServiceError::Server(format!("Failed to bind {}: {}", options.endpoint, e))
        })?;

        Ok(Self {
            socket,
            endpoint: endpoint.to_string(),
        })
    }

    /// The endpoint the socket is actually bound to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Serve requests until the transport fails.
    ///
    /// Request-level failures are answered with a structured error reply
    /// and do not end the loop. A transport failure is logged and ends the
    /// serve call; the caller decides whether to restart or exit. To stop
    /// an idle server, drop the task driving this future.
    pub async fn serve(mut self) -> Result<()> {
        info!("Listening at {}", self.endpoint);

        loop {
            let message = match self.socket.recv().await {
                Ok(message) => message,
                Err(e) => {
                    error!("Receive failed: {}", e);
                    return Err(e.into());
                }
            };

            let reply = request_handler::handle_message(&message);

            if let Err(e) = self.socket.send(ZmqMessage::from(reply)).await {
                error!("Reply failed: {}", e);
                return Err(e.into());
            }
        }
    }
}

/// Run the server with the provided options.
pub async fn run_server(options: ServiceOptions) -> Result<()> {
    // Initialize tracing if requested, with appropriate log level
    if options.init_tracing {
        let filter = match options.log_level {
            LogLevel::Debug => "ripple_service=debug,ripple_core=debug",
            LogLevel::Normal => "ripple_service=info",
            LogLevel::Quiet => "ripple_service=error",
        };

        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let server = WaveServer::bind(&options).await?;
    server.serve().await
}
