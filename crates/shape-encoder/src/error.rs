/// Errors raised while encoding a point or sample sequence.
///
/// Encoding is a pure transform; every failure is a property of the input
/// values, reported with the index of the offending point or sample. Scaled
/// coordinates and their deltas must fit a signed 32-bit integer — wide
/// enough for global geographic coordinates at 1e7 precision — and the
/// encoder fails fast rather than silently wrapping.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// A coordinate or sample was NaN or infinite.
    #[error("value {value} at index {index} is not finite")]
    NonFiniteValue { value: f64, index: usize },

    /// A value scaled by the precision factor left 32-bit range.
    #[error("value at index {index} scales to {scaled}, outside 32-bit range")]
    ScaledValueOverflow { scaled: f64, index: usize },

    /// The difference between two in-range scaled values left 32-bit range.
    #[error("delta at index {index} overflows 32-bit range")]
    DeltaOverflow { index: usize },
}
