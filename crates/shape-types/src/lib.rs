#![warn(clippy::pedantic)]

pub mod point;
pub mod precision;

pub use point::{LonLat, ShapePoint};
pub use precision::{DECODE_PRECISION, ENCODE_PRECISION};
