//! Single-channel sample encoder.
//!
//! The 1-D sibling of the shape encoders: one scalar per sample (an
//! elevation profile, per-segment grades, and the like) rather than a
//! coordinate pair. Each sample's delta from the previous sample (initial
//! previous = 0) is emitted through the 7-bit varint codec.

use shape_wire::varint;

use crate::error::EncodeError;
use crate::scale::{delta, scale_value};

/// Encode a scalar sequence as delta-coded 7-bit varints.
///
/// `precision` is a power-of-ten multiplier, as for the shape encoders;
/// decode with the reciprocal value.
///
/// # Errors
///
/// Fails fast on non-finite samples and on values whose scaled form or
/// delta leaves 32-bit range; see [`EncodeError`].
pub fn encode_samples(values: &[f64], precision: f64) -> Result<Vec<u8>, EncodeError> {
    // Profile deltas are small; most samples fit a single byte.
    let mut output = Vec::with_capacity(values.len() * 2);
    let mut last: i32 = 0;

    for (index, &value) in values.iter().enumerate() {
        let scaled = scale_value(value, precision, index)?;
        varint::encode_value(delta(scaled, last, index)?, &mut output);
        last = scaled;
    }
    Ok(output)
}
