#![no_main]

use libfuzzer_sys::fuzz_target;
use shape_types::LonLat;

// Fuzz target: 7-bit varint decode over arbitrary bytes.
fuzz_target!(|data: &[u8]| {
    let _ = shape_decoder::decode7::<Vec<LonLat>>(data, 1e-6);
});
