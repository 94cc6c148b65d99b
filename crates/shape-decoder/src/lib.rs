#![warn(clippy::pedantic)]

pub mod container;
pub mod driver;
pub mod error;
pub mod samples;
pub mod streaming;

pub use container::PointContainer;
pub use driver::{decode, decode7, decode_with};
pub use error::DecodeError;
pub use samples::decode_samples;
pub use streaming::{ClassicDecoder, ShapeStream, VarintDecoder};
