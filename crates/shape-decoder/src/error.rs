use shape_wire::WireError;

/// Errors raised while decoding an encoded point or sample sequence.
///
/// Error hierarchy:
///
/// ```text
///   DecodeError
///   ├── Wire(WireError)       ← truncated / overlong / overflowing value
///   ├── Exhausted             ← pop called on an empty decoder
///   └── CoordinateOverflow    ← running accumulator left 32-bit range
/// ```
///
/// Note what is *not* here: a precision mismatch between the encode and
/// decode calls is undetectable — the buffer carries no precision tag —
/// and silently yields structurally valid but geometrically wrong points.
/// Matching precisions are a caller contract.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// A chunk-level decode failed. The inner error distinguishes a
    /// truncated value (input ended with the continuation bit set, which
    /// also covers a point missing its longitude) from overlong and
    /// overflowing values.
    #[error(transparent)]
    Wire(#[from] WireError),

    /// `pop` was called after the decoder reported empty. The original
    /// design left this undefined; here it is a defined, fatal error.
    #[error("shape decoder exhausted: pop called past end of input")]
    Exhausted,

    /// Adding a decoded delta to the running coordinate left 32-bit
    /// range. Only malformed or adversarial input reaches this — the
    /// encoder refuses to produce such deltas.
    #[error("accumulated coordinate at offset {offset} overflows 32-bit range")]
    CoordinateOverflow { offset: usize },
}
