//! Point-sequence encoders.
//!
//! Both encoders walk the input in order, scale each coordinate by the
//! precision factor, and emit the *difference* from the previous point's
//! scaled coordinate (latitude first, then longitude — the wire order is
//! fixed regardless of the point type's field order). The first point is
//! encoded as a delta from (0, 0), so it carries the full magnitude of the
//! coordinates and later points stay short.
//!
//! No point count or length prefix is written; the output is delimited by
//! its length alone, and an empty input produces an empty output.

use shape_types::ShapePoint;
use shape_wire::{classic, varint};

use crate::error::EncodeError;
use crate::scale::{delta, scale_value};

/// Encode a point sequence in the classic 5-bit format.
///
/// The result is pure printable ASCII (every byte in `[63, 127]`), safe
/// to embed in JSON strings and URL query components. Decode with the
/// *reciprocal* of `precision` — the buffer carries no precision tag, so a
/// mismatch silently produces wrong coordinates.
///
/// # Errors
///
/// Fails fast on non-finite coordinates and on values whose scaled form
/// or delta leaves 32-bit range; see [`EncodeError`].
pub fn encode<P: ShapePoint>(points: &[P], precision: f64) -> Result<String, EncodeError> {
    // Coarse shapes rarely need more than 3 bytes per coordinate; 8 per
    // point overshoots so the buffer almost never regrows.
    let mut output = String::with_capacity(points.len() * 8);
    let mut last_lat: i32 = 0;
    let mut last_lon: i32 = 0;

    for (index, point) in points.iter().enumerate() {
        let lon = scale_value(point.lon(), precision, index)?;
        let lat = scale_value(point.lat(), precision, index)?;
        classic::encode_value(delta(lat, last_lat, index)?, &mut output);
        classic::encode_value(delta(lon, last_lon, index)?, &mut output);
        last_lat = lat;
        last_lon = lon;
    }
    Ok(output)
}

/// Encode a point sequence in the 7-bit varint format.
///
/// Same delta scheme as [`encode`], but the chunk layout packs 7 data bits
/// per byte with no ASCII bias, so the output is raw bytes rather than
/// text. Only the matching `decode7` in the decoder crate is guaranteed to
/// read it back; no compatibility with other 7-bit layouts is claimed.
///
/// # Errors
///
/// Same conditions as [`encode`].
pub fn encode7<P: ShapePoint>(points: &[P], precision: f64) -> Result<Vec<u8>, EncodeError> {
    let mut output = Vec::with_capacity(points.len() * 8);
    let mut last_lat: i32 = 0;
    let mut last_lon: i32 = 0;

    for (index, point) in points.iter().enumerate() {
        let lon = scale_value(point.lon(), precision, index)?;
        let lat = scale_value(point.lat(), precision, index)?;
        varint::encode_value(delta(lat, last_lat, index)?, &mut output);
        varint::encode_value(delta(lon, last_lon, index)?, &mut output);
        last_lat = lat;
        last_lon = lon;
    }
    Ok(output)
}
