//! One-shot client for the Ripple service.
//!
//! Loads a positions file, sends a single transform request, and prints the
//! updated and previous vertical coordinate for each position.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use zeromq::{Socket, SocketRecv, SocketSend, ZmqMessage};

use ripple_core::{DeformRequest, ErrorReply, Position, WaveParams};

/// Command-line arguments for the Ripple client.
#[derive(Parser, Debug)]
#[command(author, version, about = "Send one transform request to a Ripple service")]
struct Cli {
    /// JSON file with the positions to send (an array of [x, y] arrays)
    input: PathBuf,

    /// Endpoint of the service
    #[arg(short, long, default_value = "tcp://127.0.0.1:7070")]
    connect: String,

    /// Wave frequency
    #[arg(long, default_value_t = 1.0)]
    frequency: f64,

    /// Wave phase offset
    #[arg(long, default_value_t = 0.0)]
    offset: f64,

    /// Wave amplitude
    #[arg(long, default_value_t = 1.0)]
    amplitude: f64,

    /// Deformation weight
    #[arg(long, default_value_t = 1.0)]
    envelope: f64,

    /// Print the raw reply JSON instead of the comparison
    #[arg(long, default_value_t = false)]
    raw: bool,

    /// Timeout for the whole exchange, in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let body = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    let positions: Vec<Position> = serde_json::from_str(&body)
        .with_context(|| format!("Invalid positions file {}", cli.input.display()))?;

    let request = DeformRequest {
        data: WaveParams {
            frequency: cli.frequency,
            offset: cli.offset,
            amplitude: cli.amplitude,
            envelope: cli.envelope,
        },
        positions: positions.clone(),
    };

    let reply = tokio::time::timeout(
        Duration::from_secs(cli.timeout),
        exchange(&cli.connect, &request),
    )
    .await
    .map_err(|_| anyhow!("Timed out waiting for {}", cli.connect))??;

    if cli.raw {
        println!("{}", reply);
        return Ok(());
    }

    let updated: Vec<Position> = match serde_json::from_str(&reply) {
        Ok(updated) => updated,
        Err(_) => {
            let err: ErrorReply = serde_json::from_str(&reply)
                .map_err(|_| anyhow!("Unrecognized reply: {}", reply))?;
            return Err(anyhow!("Service error: {}", err.error));
        }
    };

    for (after, before) in updated.iter().zip(positions.iter()) {
        println!("{} : {}", after.y(), before.y());
    }

    Ok(())
}

/// Send one request and return the reply body.
async fn exchange(endpoint: &str, request: &DeformRequest) -> Result<String> {
    let mut socket = zeromq::ReqSocket::new();
    socket
        .connect(endpoint)
        .await
        .map_err(|e| anyhow!("Connection error: {}", e))?;

    let body = serde_json::to_string(request)?;
    socket
        .send(ZmqMessage::from(body))
        .await
        .map_err(|e| anyhow!("Failed to send request: {}", e))?;

    let reply = socket
        .recv()
        .await
        .map_err(|e| anyhow!("Failed to receive reply: {}", e))?;

    let frame = reply.get(0).ok_or_else(|| anyhow!("Empty reply"))?;
    Ok(String::from_utf8(frame.to_vec())?)
}
