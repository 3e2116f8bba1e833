//! Math support for the colorimetric model
//!
//! 3x3 matrix operations over f64; 3x1 vectors are plain `[f64; 3]`.

pub mod matrix;

pub use matrix::Matrix3x3;
