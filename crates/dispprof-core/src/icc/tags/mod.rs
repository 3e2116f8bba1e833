//! Tag extractors
//!
//! Each extractor takes the reader positioned at the start of its tag data
//! and either contributes to the model under construction or fails the whole
//! decode.

pub mod lut;
pub mod trc;
pub mod vcgt;
pub mod xyz;
