#![warn(clippy::pedantic)]

//! Shared fixtures for the integration tests and benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shape_types::LonLat;

/// A deterministic pseudo-random route: a walk of small steps from a
/// fixed start, the shape deltas real encoded polylines are made of.
#[must_use]
pub fn seeded_route(seed: u64, len: usize) -> Vec<LonLat> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut lon = rng.gen_range(-180.0..180.0);
    let mut lat = rng.gen_range(-90.0..90.0);

    let mut route = Vec::with_capacity(len);
    for _ in 0..len {
        route.push(LonLat::new(lon, lat));
        lon = (lon + rng.gen_range(-0.01..0.01)).clamp(-180.0, 180.0);
        lat = (lat + rng.gen_range(-0.01..0.01)).clamp(-90.0, 90.0);
    }
    route
}

/// Deterministic pseudo-random scattered points across the whole globe —
/// worst case for delta encoding, every delta near full magnitude.
#[must_use]
pub fn seeded_scatter(seed: u64, len: usize) -> Vec<LonLat> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| LonLat::new(rng.gen_range(-180.0..180.0), rng.gen_range(-90.0..90.0)))
        .collect()
}
