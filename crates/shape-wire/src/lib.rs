#![warn(clippy::pedantic)]

pub mod classic;
pub mod cursor;
pub mod error;
pub mod varint;
pub mod zigzag;

pub use cursor::ByteCursor;
pub use error::WireError;
