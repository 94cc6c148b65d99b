#![no_main]

use libfuzzer_sys::fuzz_target;
use shape_decoder::decode;
use shape_encoder::encode;
use shape_types::LonLat;

// Fuzz target: encode→decode roundtrip.
//
// Input is an arbitrary list of (lon, lat) pairs, filtered down to finite
// values in geographic range. Encoding must succeed, decoding must succeed,
// and every coordinate must come back within the 0.5/precision rounding
// bound.
fuzz_target!(|input: Vec<(f64, f64)>| {
    let points: Vec<LonLat> = input
        .into_iter()
        .filter(|(lon, lat)| {
            lon.is_finite() && lat.is_finite() && lon.abs() <= 180.0 && lat.abs() <= 90.0
        })
        .map(|(lon, lat)| LonLat::new(lon, lat))
        .collect();

    let encoded = encode(&points, 1e6).expect("in-range points must encode");
    let decoded: Vec<LonLat> = decode(&encoded, 1e-6).expect("own encoding must decode");

    assert_eq!(decoded.len(), points.len());
    let bound = 5e-7 + 1e-9;
    for (got, want) in decoded.iter().zip(&points) {
        assert!((got.lon - want.lon).abs() <= bound);
        assert!((got.lat - want.lat).abs() <= bound);
    }
});
