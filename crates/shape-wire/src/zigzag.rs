//! Zigzag sign mapping.
//!
//! A bijection between signed and unsigned 32-bit integers that keeps
//! small-magnitude values (of either sign) mapped to small unsigned
//! values, so the variable-length chunk codecs stay short for the small
//! deltas that dominate real coordinate sequences.
//!
//! | Signed | Unsigned |
//! |--------|----------|
//! | 0      | 0        |
//! | -1     | 1        |
//! | 1      | 2        |
//! | -2     | 3        |
//! | 2      | 4        |

/// Map a signed delta to its unsigned zigzag form.
///
/// Non-negative `n` becomes `n << 1`; negative `n` becomes the bitwise
/// complement of `n << 1` (equivalently `2 * |n| - 1`).
#[must_use]
pub fn to_unsigned(n: i32) -> u32 {
    #[allow(clippy::cast_sign_loss)]
    let shifted = (n as u32) << 1;
    if n < 0 { !shifted } else { shifted }
}

/// Invert [`to_unsigned`]: recover the signed delta.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn to_signed(u: u32) -> i32 {
    if u & 1 == 0 {
        (u >> 1) as i32
    } else {
        !(u >> 1) as i32
    }
}
