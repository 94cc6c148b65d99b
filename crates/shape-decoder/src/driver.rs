//! Generic decode driver.
//!
//! Drains a streaming decoder into any [`PointContainer`], selecting the
//! wire variant at compile time via the [`ShapeStream`] type parameter.

use shape_types::ShapePoint;

use crate::container::PointContainer;
use crate::error::DecodeError;
use crate::streaming::{ClassicDecoder, ShapeStream, VarintDecoder};

/// Decode a classic-format buffer into a container of points.
///
/// `precision` is the reciprocal of the encode-side scale factor:
/// a buffer produced at `1e6` decodes at `1e-6`
/// ([`DECODE_PRECISION`](shape_types::DECODE_PRECISION)). The buffer
/// carries no precision tag, so a mismatch silently yields wrong
/// coordinates.
///
/// # Errors
///
/// Any [`DecodeError`] from the underlying stream; an input that ends
/// mid-point is malformed and fails, it does not yield a partial point.
///
/// # Example
///
/// ```rust
/// use shape_decoder::decode;
/// use shape_types::{DECODE_PRECISION, LonLat};
///
/// let route: Vec<LonLat> =
///     decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@", 1e-5).unwrap();
/// assert_eq!(route.len(), 3);
///
/// let empty: Vec<LonLat> = decode("", DECODE_PRECISION).unwrap();
/// assert!(empty.is_empty());
/// ```
pub fn decode<C>(encoded: impl AsRef<[u8]>, precision: f64) -> Result<C, DecodeError>
where
    C: PointContainer,
    C::Point: ShapePoint,
{
    decode_with::<C, ClassicDecoder>(encoded.as_ref(), precision)
}

/// Decode a 7-bit varint buffer into a container of points.
///
/// Reads only buffers produced by this crate family's `encode7`; see the
/// encoder documentation for the compatibility caveat.
///
/// # Errors
///
/// Same conditions as [`decode`].
pub fn decode7<C>(encoded: impl AsRef<[u8]>, precision: f64) -> Result<C, DecodeError>
where
    C: PointContainer,
    C::Point: ShapePoint,
{
    decode_with::<C, VarintDecoder>(encoded.as_ref(), precision)
}

/// Decode with an explicit stream variant.
///
/// The container is pre-sized to `len / 4` points — two values of at
/// least two bytes each is the common case — purely as an allocation
/// hint.
///
/// # Errors
///
/// Any [`DecodeError`] from the chosen stream.
pub fn decode_with<'a, C, S>(encoded: &'a [u8], precision: f64) -> Result<C, DecodeError>
where
    C: PointContainer,
    C::Point: ShapePoint,
    S: ShapeStream<'a>,
{
    let mut stream = S::new(encoded, precision);
    let mut container = C::with_capacity_hint(encoded.len() / 4);
    while !stream.is_empty() {
        container.push(stream.pop()?);
    }
    Ok(container)
}
