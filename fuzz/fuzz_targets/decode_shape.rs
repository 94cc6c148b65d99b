#![no_main]

use libfuzzer_sys::fuzz_target;
use shape_types::LonLat;

// Fuzz target: classic-format decode over arbitrary bytes.
//
// Catches bugs in:
// - Chunk accumulation overflow
// - Truncated values (continuation bit on the last byte)
// - Accumulator overflow on adversarial deltas
//
// Any outcome is fine except a panic.
fuzz_target!(|data: &[u8]| {
    let _ = shape_decoder::decode::<Vec<LonLat>>(data, 1e-6);
});
