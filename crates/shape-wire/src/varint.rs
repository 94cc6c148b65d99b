//! 7-bit varint chunk codec, used by the high-precision shape variant and
//! the single-channel sample codec.
//!
//! Same shape as the classic codec — zigzag sign mapping, low-to-high
//! chunks, a continuation flag on every non-final byte — but with 7 data
//! bits per chunk, the 0x80 continuation flag, and no ASCII bias. Output
//! bytes use the full 0..=255 range and are **not** printable or UTF-8
//! safe; callers that need text transport should use the classic codec.
//!
//! The original deployment of this layout is not observable from the
//! material this crate was built against, so no compatibility with
//! externally produced 7-bit streams is claimed — only that this module's
//! encode and decode are mutual inverses.
//!
//! # Wire format examples
//!
//! | Delta | Encoded        |
//! |-------|----------------|
//! | 0     | `[0x00]`       |
//! | -1    | `[0x01]`       |
//! | 1     | `[0x02]`       |
//! | 64    | `[0x80, 0x01]` |

use crate::cursor::ByteCursor;
use crate::error::WireError;
use crate::zigzag;

/// Continuation flag: set on every chunk except the last of a value.
const CONTINUATION: u32 = 0x80;

/// Mask for the seven data bits of a chunk.
const CHUNK_MASK: u32 = 0x7f;

/// Maximum number of chunks a 32-bit value can occupy.
/// ceil(32 / 7) = 5 chunks.
const MAX_CHUNKS: usize = 5;

/// Append one signed delta to `out` as a 7-bit chunk run.
pub fn encode_value(delta: i32, out: &mut Vec<u8>) {
    let mut value = zigzag::to_unsigned(delta);
    while value >= CONTINUATION {
        #[allow(clippy::cast_possible_truncation)]
        let byte = (CONTINUATION | (value & CHUNK_MASK)) as u8;
        out.push(byte);
        value >>= 7;
    }
    #[allow(clippy::cast_possible_truncation)]
    let last = value as u8;
    out.push(last);
}

/// Decode one signed delta from the cursor.
///
/// # Errors
///
/// - [`WireError::UnexpectedEof`] if the input ends while the continuation
///   bit is still set.
/// - [`WireError::ValueTooLong`] after more than 5 chunks without a
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
        let chunk = u32::from(byte);
        result |= u64::from(chunk & CHUNK_MASK) << shift;
        shift += 7;
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
