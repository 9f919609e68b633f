//! Request and reply document types for the Ripple wire protocol.
//!
//! A request carries one set of wave parameters and a list of positions;
//! the reply carries the updated position list alone. Nothing here outlives
//! a single request/reply exchange.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RippleError};

/// Sine-wave parameters, applied uniformly to every position in a request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveParams {
    /// Scale applied to the horizontal coordinate inside the sine
    pub frequency: f64,

    /// Phase offset added inside the sine
    pub offset: f64,

    /// Scale applied to the sine value
    pub amplitude: f64,

    /// Outer deformation weight
    pub envelope: f64,
}

/// A single position: at least `[x, y]`, with any further components
/// carried through untouched.
///
/// The first component is the input domain value, the second is the value
/// the transform displaces. Clients sending 3D geometry use `[x, y, z]`
/// triplets; anything past the second component rides along unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>")]
pub struct Position(Vec<f64>);

impl Position {
    /// Create a two-component position.
    pub fn new(x: f64, y: f64) -> Self {
        Self(vec![x, y])
    }

    /// The horizontal coordinate.
    pub fn x(&self) -> f64 {
        self.0[0]
    }

    /// The vertical coordinate.
    pub fn y(&self) -> f64 {
        self.0[1]
    }

    /// Replace the vertical coordinate.
    pub fn set_y(&mut self, y: f64) {
        self.0[1] = y;
    }

    /// All components, in order.
    pub fn components(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for Position {
    type Error = RippleError;

    fn try_from(components: Vec<f64>) -> Result<Self> {
        if components.len() < 2 {
            return Err(RippleError::MalformedRequest(format!(
                "position needs at least two components, got {}",
                components.len()
            )));
        }
        Ok(Self(components))
    }
}

/// One inbound transform request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeformRequest {
    /// Wave parameters for this request
    pub data: WaveParams,

    /// Positions to displace; an absent list means an empty one
    #[serde(default)]
    pub positions: Vec<Position>,
}

impl DeformRequest {
    /// Parse a request from its UTF-8 JSON body.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| RippleError::MalformedRequest(e.to_string()))
    }
}

/// Structured error reply body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReply {
    /// Human-readable failure description
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_request() {
        let request = DeformRequest::from_json(
            r#"{
                "data": {"frequency": 1.0, "offset": 0.5, "amplitude": 2.0, "envelope": 1.0},
                "positions": [[0.0, 0.0], [1.5, -2.0]]
            }"#,
        )
        .expect("request parses");

        assert_eq!(request.data.frequency, 1.0);
        assert_eq!(request.data.offset, 0.5);
        assert_eq!(request.positions.len(), 2);
        assert_eq!(request.positions[1].x(), 1.5);
        assert_eq!(request.positions[1].y(), -2.0);
    }

    #[test]
    fn integer_numbers_are_accepted() {
        let request = DeformRequest::from_json(
            r#"{"data": {"frequency": 1, "offset": 0, "amplitude": 5, "envelope": 2}, "positions": [[3, 1]]}"#,
        )
        .expect("request parses");

        assert_eq!(request.data.amplitude, 5.0);
        assert_eq!(request.positions[0].y(), 1.0);
    }

    #[test]
    fn missing_parameter_is_malformed() {
        let err = DeformRequest::from_json(
            r#"{"data": {"offset": 0.0, "amplitude": 1.0, "envelope": 1.0}, "positions": []}"#,
        )
        .expect_err("frequency is required");

        assert!(matches!(err, RippleError::MalformedRequest(_)));
    }

    #[test]
    fn non_numeric_parameter_is_malformed() {
        let err = DeformRequest::from_json(
            r#"{"data": {"frequency": "fast", "offset": 0.0, "amplitude": 1.0, "envelope": 1.0}}"#,
        )
        .expect_err("frequency must be numeric");

        assert!(matches!(err, RippleError::MalformedRequest(_)));
    }

    #[test]
    fn absent_positions_mean_an_empty_list() {
        let request = DeformRequest::from_json(
            r#"{"data": {"frequency": 1.0, "offset": 0.0, "amplitude": 1.0, "envelope": 1.0}}"#,
        )
        .expect("request parses");

        assert!(request.positions.is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let request = DeformRequest::from_json(
            r#"{
                "data": {"frequency": 1.0, "offset": 0.0, "amplitude": 1.0, "envelope": 1.0, "phase": 3.0},
                "positions": [],
                "client": "maya"
            }"#,
        )
        .expect("extra fields do not fail the parse");

        assert!(request.positions.is_empty());
    }

    #[test]
    fn short_position_is_malformed() {
        let err = DeformRequest::from_json(
            r#"{"data": {"frequency": 1.0, "offset": 0.0, "amplitude": 1.0, "envelope": 1.0}, "positions": [[4.0]]}"#,
        )
        .expect_err("one component is not a position");

        assert!(matches!(err, RippleError::MalformedRequest(_)));
    }

    #[test]
    fn extra_components_are_kept() {
        let request = DeformRequest::from_json(
            r#"{"data": {"frequency": 1.0, "offset": 0.0, "amplitude": 1.0, "envelope": 1.0}, "positions": [[1.0, 2.0, 3.0]]}"#,
        )
        .expect("triplets parse");

        assert_eq!(request.positions[0].components(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn positions_serialize_as_plain_arrays() {
        let json = serde_json::to_string(&vec![Position::new(1.0, 2.0)]).expect("serializes");
        assert_eq!(json, "[[1.0,2.0]]");
    }
}
