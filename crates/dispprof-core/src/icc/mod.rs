//! ICC profile decoding
//!
//! An ICC profile is a 128-byte header, a tag directory, and tag data. The
//! decoder validates the header, walks the directory, and hands each
//! relevant tag to an extractor. See ICC.1:2022.

pub mod header;
pub mod parser;
pub mod tags;
pub mod types;

pub use types::{TagSignature, TypeSignature};
