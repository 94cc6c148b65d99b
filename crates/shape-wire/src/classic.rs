//! Classic 5-bit chunk codec.
//!
//! Each signed delta is zigzag-mapped, then emitted low-to-high in 5-bit
//! chunks. Every non-final chunk carries the continuation flag (0x20), and
//! every byte is biased by +63, which pins the output to the printable
//! ASCII range `[63, 127]` — safe to embed in JSON strings and URL query
//! components without escaping. The format is self-terminating: a decoder
//! needs no external length, only the continuation bit of each byte.
//!
//! # Wire format examples
//!
//! | Delta     | Encoded      |
//! |-----------|--------------|
//! | 0         | `"?"`        |
//! | -1        | `"@"`        |
//! | 1         | `"A"`        |
//! | 17        | `"a@"`       |
//! | 3850000   | `"_p~iF"`    |
//! | -12020000 | `"~ps|U"`    |

use crate::cursor::ByteCursor;
use crate::error::WireError;
use crate::zigzag;

/// Continuation flag: set on every chunk except the last of a value.
const CONTINUATION: u32 = 0x20;

/// Mask for the five data bits of a chunk.
const CHUNK_MASK: u32 = 0x1f;

/// Bias added to every output byte to keep it printable.
const BIAS: u8 = 63;

/// Maximum number of chunks a 32-bit value can occupy.
/// ceil(32 / 5) = 7 chunks.
const MAX_CHUNKS: usize = 7;

/// Append one signed delta to `out` as a biased 5-bit chunk run.
///
/// Every byte produced falls in `[63, 127]`, so the output string stays
/// pure ASCII.
pub fn encode_value(delta: i32, out: &mut String) {
    let mut value = zigzag::to_unsigned(delta);
    while value >= CONTINUATION {
        #[allow(clippy::cast_possible_truncation)]
        let byte = (CONTINUATION | (value & CHUNK_MASK)) as u8 + BIAS;
        out.push(char::from(byte));
        value >>= 5;
    }
    #[allow(clippy::cast_possible_truncation)]
    let last = value as u8 + BIAS;
    out.push(char::from(last));
}

/// Decode one signed delta from the cursor.
///
/// # Errors
///
/// - [`WireError::UnexpectedEof`] if the input ends while the continuation
///   bit is still set — the sole malformed-input condition of this format.
/// - [`WireError::ValueTooLong`] after more than 7 chunks without a
///   terminating byte.
/// - [`WireError::Overflow`] if the accumulated value exceeds 32 bits.
pub fn decode_value(cursor: &mut ByteCursor<'_>) -> Result<i32, WireError> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;
    let mut chunks: usize = 0;

    loop {
        let Some(byte) = cursor.next() else {
            return Err(WireError::UnexpectedEof { offset: cursor.offset() });
        };
        if chunks == MAX_CHUNKS {
            return Err(WireError::ValueTooLong {
                offset: cursor.offset(),
                max_bytes: MAX_CHUNKS,
            });
        }
        // Take the least significant 5 bits shifted into place.
        let chunk = u32::from(byte.wrapping_sub(BIAS));
        result |= u64::from(chunk & CHUNK_MASK) << shift;
        shift += 5;
        chunks += 1;
        if chunk & CONTINUATION == 0 {
            break;
        }
    }

    if result > u64::from(u32::MAX) {
        return Err(WireError::Overflow { offset: cursor.offset() });
    }
    #[allow(clippy::cast_possible_truncation)]
    let value = result as u32;
    Ok(zigzag::to_signed(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(delta: i32) -> String {
        let mut out = String::new();
        encode_value(delta, &mut out);
        out
    }

    fn decode(encoded: &str) -> Result<i32, WireError> {
        decode_value(&mut ByteCursor::new(encoded.as_bytes()))
    }

    #[test]
    fn encode_zero() {
        assert_eq!(encode(0), "?");
    }

    #[test]
    fn encode_minus_one() {
        assert_eq!(encode(-1), "@");
    }

    #[test]
    fn encode_one() {
        assert_eq!(encode(1), "A");
    }

    #[test]
    fn encode_two_chunk_value() {
        // zigzag(17) = 34 spills into a second chunk
        assert_eq!(encode(17), "a@");
    }

    #[test]
    fn encode_reference_coordinate_deltas() {
        // 38.5 and -120.2 scaled by 1e5, from the published reference
        // polyline example
        assert_eq!(encode(3_850_000), "_p~iF");
        assert_eq!(encode(-12_020_000), "~ps|U");
    }

    #[test]
    fn output_stays_in_printable_range() {
        for delta in [0, 1, -1, 90_000_000, -90_000_000, i32::MAX, i32::MIN] {
            for byte in encode(delta).bytes() {
                assert!((63..=127).contains(&byte), "byte {byte} out of range");
            }
        }
    }

    #[test]
    fn roundtrip_boundary_values() {
        let deltas = [
            0,
            1,
            -1,
            15,
            -16,
            16,
            17,
            1_000_000,
            -1_000_000,
            180_000_000,
            -180_000_000,
            i32::MAX,
            i32::MIN,
        ];
        for &delta in &deltas {
            let encoded = encode(delta);
            let mut cursor = ByteCursor::new(encoded.as_bytes());
            let decoded = decode_value(&mut cursor).unwrap();
            assert_eq!(decoded, delta, "roundtrip failed for {delta}");
            assert!(cursor.is_empty(), "trailing bytes for {delta}");
        }
    }

    #[test]
    fn decode_leaves_trailing_bytes() {
        let mut buf = String::new();
        encode_value(17, &mut buf);
        buf.push('A');
        let mut cursor = ByteCursor::new(buf.as_bytes());
        assert_eq!(decode_value(&mut cursor).unwrap(), 17);
        assert_eq!(cursor.offset(), 2);
        assert!(!cursor.is_empty());
    }

    #[test]
    fn decode_empty_input() {
        assert!(matches!(
            decode(""),
            Err(WireError::UnexpectedEof { offset: 0 })
        ));
    }

    #[test]
    fn decode_truncated_value() {
        // A single byte with the continuation bit set and no successor.
        let buf = [63 + 0x20];
        let mut cursor = ByteCursor::new(&buf);
        assert!(matches!(
            decode_value(&mut cursor),
            Err(WireError::UnexpectedEof { offset: 1 })
        ));
    }

    #[test]
    fn decode_unterminated_run_is_too_long() {
        // Eight continuation chunks never terminate a 32-bit value.
        let buf = [63 + 0x20; 8];
        let mut cursor = ByteCursor::new(&buf);
        assert!(matches!(
            decode_value(&mut cursor),
            Err(WireError::ValueTooLong { .. })
        ));
    }

    #[test]
    fn decode_overflowing_value() {
        // Seven chunks of all-ones accumulate 35 set bits.
        let mut buf = [63 + 0x3f; 7];
        buf[6] = 63 + 0x1f;
        let mut cursor = ByteCursor::new(&buf);
        assert!(matches!(
            decode_value(&mut cursor),
            Err(WireError::Overflow { .. })
        ));
    }
}
