//! Core types and functionality for the Ripple system.
//!
//! This crate provides the request/reply document types, the error type,
//! and the sine-wave transform applied by the Ripple service. It carries
//! no transport code, so the transform can be exercised without a live
//! endpoint.

mod error;
mod protocol;
mod transform;

// Re-export core types
pub use error::{Result, RippleError};
pub use protocol::{DeformRequest, ErrorReply, Position, WaveParams};
pub use transform::{apply_wave, compute};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
