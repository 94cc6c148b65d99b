//! Conventional precision scale factors.
//!
//! The encoder takes a *multiplier* (coordinates are scaled up and rounded
//! to integers) while the decoder takes the *reciprocal* (reconstructed
//! integers are scaled back down). The encoded buffer carries no precision
//! tag, so passing mismatched values produces structurally valid but
//! geometrically wrong output — matching precisions are a caller contract.

/// Default encode scale factor: six decimal digits of precision.
pub const ENCODE_PRECISION: f64 = 1e6;

/// Default decode scale factor — the reciprocal of [`ENCODE_PRECISION`].
pub const DECODE_PRECISION: f64 = 1e-6;
