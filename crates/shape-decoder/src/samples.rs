//! Single-channel sample decoder.

use shape_wire::{ByteCursor, varint};

use crate::error::DecodeError;

/// Decode a delta-coded scalar sequence produced by `encode_samples`.
///
/// `precision` is the reciprocal of the encode-side scale factor.
///
/// # Errors
///
/// Any chunk-level [`WireError`](shape_wire::WireError) (a buffer ending
/// mid-value is malformed), or [`DecodeError::CoordinateOverflow`] if an
/// adversarial delta pushes the accumulator out of 32-bit range.
pub fn decode_samples(encoded: impl AsRef<[u8]>, precision: f64) -> Result<Vec<f64>, DecodeError> {
    let encoded = encoded.as_ref();
    let mut cursor = ByteCursor::new(encoded);
    // One byte per sample is the floor, so len is a safe upper bound.
    let mut values = Vec::with_capacity(encoded.len());
    let mut last: i32 = 0;

    while !cursor.is_empty() {
        let delta = varint::decode_value(&mut cursor)?;
        last = last
            .checked_add(delta)
            .ok_or(DecodeError::CoordinateOverflow {
                offset: cursor.offset(),
            })?;
        values.push(f64::from(last) * precision);
    }
    Ok(values)
}
