//! Streaming point decoders.
//!
//! A decoder is a pull cursor over one encoded buffer: each [`pop`]
//! decodes exactly two values (latitude delta, then longitude delta),
//! folds them into the running accumulators, and returns the absolute
//! point scaled by the precision factor. [`is_empty`] reports whether the
//! cursor has consumed the whole input; a well-formed buffer lands exactly
//! on the end after the last full point.
//!
//! The two variants share everything but the chunk layout, selected at
//! compile time through the [`ShapeStream`] trait — the classic and varint
//! layouts are never mixed within one decode.
//!
//! [`pop`]: ShapeStream::pop
//! [`is_empty`]: ShapeStream::is_empty

use shape_types::ShapePoint;
use shape_wire::{ByteCursor, WireError, classic, varint};

use crate::error::DecodeError;

/// One-at-a-time point decoding over an encoded buffer.
///
/// `precision` is the *reciprocal* of the scale factor used to encode
/// (e.g. `1e-6` for a buffer encoded at `1e6`).
pub trait ShapeStream<'a>: Sized {
    fn new(encoded: &'a [u8], precision: f64) -> Self;

    /// True once the input is fully consumed.
    fn is_empty(&self) -> bool;

    /// Decode the next point.
    ///
    /// # Errors
    ///
    /// [`DecodeError::Exhausted`] when called on an empty decoder;
    /// otherwise any chunk-level failure, including a point truncated
    /// before its longitude.
    fn pop<P: ShapePoint>(&mut self) -> Result<P, DecodeError>;
}

/// Cursor plus running accumulators, shared by both variants.
struct DecoderCore<'a> {
    cursor: ByteCursor<'a>,
    lat: i32,
    lon: i32,
    precision: f64,
}

impl<'a> DecoderCore<'a> {
    fn new(encoded: &'a [u8], precision: f64) -> Self {
        Self {
            cursor: ByteCursor::new(encoded),
            lat: 0,
            lon: 0,
            precision,
        }
    }

    fn pop<P: ShapePoint>(
        &mut self,
        decode_value: fn(&mut ByteCursor<'a>) -> Result<i32, WireError>,
    ) -> Result<P, DecodeError> {
        if self.cursor.is_empty() {
            return Err(DecodeError::Exhausted);
        }
        // Wire order is lat then lon; the constructed point is lon-first.
        let lat_delta = decode_value(&mut self.cursor)?;
        self.lat = self.accumulate(self.lat, lat_delta)?;
        let lon_delta = decode_value(&mut self.cursor)?;
        self.lon = self.accumulate(self.lon, lon_delta)?;
        Ok(P::from_lon_lat(
            f64::from(self.lon) * self.precision,
            f64::from(self.lat) * self.precision,
        ))
    }

    fn accumulate(&self, previous: i32, delta: i32) -> Result<i32, DecodeError> {
        previous
            .checked_add(delta)
            .ok_or(DecodeError::CoordinateOverflow {
                offset: self.cursor.offset(),
            })
    }
}

/// Streaming decoder for the classic 5-bit format.
pub struct ClassicDecoder<'a> {
    core: DecoderCore<'a>,
}

impl<'a> ShapeStream<'a> for ClassicDecoder<'a> {
    fn new(encoded: &'a [u8], precision: f64) -> Self {
        Self {
            core: DecoderCore::new(encoded, precision),
        }
    }

    fn is_empty(&self) -> bool {
        self.core.cursor.is_empty()
    }

    fn pop<P: ShapePoint>(&mut self) -> Result<P, DecodeError> {
        self.core.pop(classic::decode_value)
    }
}

/// Streaming decoder for the 7-bit varint format.
pub struct VarintDecoder<'a> {
    core: DecoderCore<'a>,
}

impl<'a> ShapeStream<'a> for VarintDecoder<'a> {
    fn new(encoded: &'a [u8], precision: f64) -> Self {
        Self {
            core: DecoderCore::new(encoded, precision),
        }
    }

    fn is_empty(&self) -> bool {
        self.core.cursor.is_empty()
    }

    fn pop<P: ShapePoint>(&mut self) -> Result<P, DecodeError> {
        self.core.pop(varint::decode_value)
    }
}
