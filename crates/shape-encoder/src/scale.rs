//! Precision scaling and delta computation, shared by the shape and
//! sample encoders.

use crate::error::EncodeError;

/// Scale a real value by the precision factor and round to the nearest
/// integer, half away from zero.
///
/// Half-away-from-zero (`f64::round`) is the tie-breaking rule used by the
/// reference polyline implementations; it is externally observable at
/// exact half-unit values, so the decoder side of a round-trip relies on
/// this choice.
pub(crate) fn scale_value(value: f64, precision: f64, index: usize) -> Result<i32, EncodeError> {
    if !value.is_finite() {
        return Err(EncodeError::NonFiniteValue { value, index });
    }
    let scaled = (value * precision).round();
    if !scaled.is_finite() || scaled < f64::from(i32::MIN) || scaled > f64::from(i32::MAX) {
        return Err(EncodeError::ScaledValueOverflow { scaled, index });
    }
    #[allow(clippy::cast_possible_truncation)]
    let scaled = scaled as i32;
    Ok(scaled)
}

/// Signed difference of two scaled values, failing fast on 32-bit overflow.
pub(crate) fn delta(current: i32, previous: i32, index: usize) -> Result<i32, EncodeError> {
    current
        .checked_sub(previous)
        .ok_or(EncodeError::DeltaOverflow { index })
}
