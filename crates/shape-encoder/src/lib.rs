#![warn(clippy::pedantic)]

pub mod error;
pub mod samples;
pub mod shape;

mod scale;

pub use error::EncodeError;
pub use samples::encode_samples;
pub use shape::{encode, encode7};
