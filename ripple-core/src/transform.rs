//! The sine-wave displacement applied to request positions.

use crate::protocol::{DeformRequest, Position, WaveParams};

/// Displace each position's vertical coordinate in place.
///
/// For a position `(x, y)` the displacement is
/// `sin(x * frequency + offset) * amplitude * envelope`, added to `y`. The
/// horizontal coordinate and any components past the second stay as they
/// were. Positions are independent of each other and of any earlier
/// request.
pub fn apply_wave(params: &WaveParams, positions: &mut [Position]) {
    for pos in positions.iter_mut() {
        let value =
            (pos.x() * params.frequency + params.offset).sin() * params.amplitude * params.envelope;
        pos.set_y(pos.y() + value);
    }
}

/// Consume a request and return its updated position list.
///
/// Only the positions survive into the reply; the rest of the request
/// document is discarded here.
pub fn compute(mut request: DeformRequest) -> Vec<Position> {
    apply_wave(&request.data, &mut request.positions);
    request.positions
}
