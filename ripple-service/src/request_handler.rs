//! Per-message request handling for the Ripple service.
//!
//! Decodes the message as UTF-8 JSON, runs the transform, and encodes
//! either the updated position list or a structured error reply. Every
//! message gets exactly one reply, which keeps the reply socket's
//! state machine in step.

use tracing::{debug, warn};
use zeromq::ZmqMessage;

use ripple_core::{compute, DeformRequest, ErrorReply, Result, RippleError};

/// Handle one inbound message and produce the reply body.
pub fn handle_message(message: &ZmqMessage) -> String {
    match decode_text(message).and_then(|text| handle_request(&text)) {
        Ok(reply) => reply,
        Err(err) => {
            warn!("Request failed: {}", err);
            error_reply(&err)
        }
    }
}

/// Handle one request body and produce the success reply body.
///
/// The reply is the serialized position list alone; the rest of the
/// request document is discarded.
pub fn handle_request(body: &str) -> Result<String> {
    let request = DeformRequest::from_json(body)?;
    debug!("Transforming {} positions", request.positions.len());

    let positions = compute(request);
    Ok(serde_json::to_string(&positions)?)
}

/// Extract the UTF-8 text of the first message frame.
fn decode_text(message: &ZmqMessage) -> Result<String> {
    let frame = message
        .get(0)
        .ok_or_else(|| RippleError::MalformedRequest("empty message".to_string()))?;

    std::str::from_utf8(frame)
        .map(str::to_string)
        .map_err(|e| RippleError::MalformedRequest(format!("request is not UTF-8: {}", e)))
}

/// Encode a failure as the structured error reply body.
fn error_reply(err: &RippleError) -> String {
    serde_json::to_string(&ErrorReply {
        error: err.to_string(),
    })
    .unwrap_or_else(|_| r#"{"error":"Failed to serialize error"}"#.to_string())
}
