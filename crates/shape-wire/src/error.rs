/// Errors raised by the chunk-level decoders.
///
/// All variants carry the byte offset at which the read failed, measured
/// from the start of the encoded input. This is the position *after* the
/// last byte consumed.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// Input ended while the continuation bit of the current value was
    /// still set. This is the malformed-input condition: a truncated
    /// buffer, or garbage that never terminates a value.
    #[error("unexpected end of input at offset {offset}: value not terminated")]
    UnexpectedEof { offset: usize },

    /// A single value ran past the maximum chunk count for a 32-bit
    /// integer without terminating.
    #[error("value too long at offset {offset}: exceeded {max_bytes}-byte limit")]
    ValueTooLong { offset: usize, max_bytes: usize },

    /// The accumulated value does not fit in 32 bits.
    #[error("decoded value at offset {offset} overflows 32-bit range")]
    Overflow { offset: usize },
}
