#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: single-channel sample decode over arbitrary bytes.
fuzz_target!(|data: &[u8]| {
    let _ = shape_decoder::decode_samples(data, 1e-2);
});
