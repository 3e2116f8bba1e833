//! # dispprof - display profile decoder
//!
//! Decodes an ICC display color profile and reconstructs a compact
//! colorimetric model: a 3x3 linear-RGB→CIEXYZ matrix adapted to the D50
//! reference white, three per-channel tone-response curves, and an optional
//! video-card gamma table.
//!
//! Two profile shapes are supported:
//!
//! - classical matrix + TRC profiles (rXYZ/gXYZ/bXYZ + rTRC/gTRC/bTRC),
//!   decoded directly;
//! - LUT-encoded profiles (A2B1 in lut16Type form), reduced to an equivalent
//!   matrix + curve model via primary and black-point extraction from the
//!   3-D grid.
//!
//! ## Quick start
//!
//! ```no_run
//! use dispprof_core::ColorProfile;
//!
//! let bytes = std::fs::read("display.icc")?;
//! let profile = ColorProfile::decode(&bytes)?;
//!
//! // XYZ of full-intensity red
//! let red_linear = profile.trcs[0].sample(1.0);
//! let xyz = profile.matrix.multiply_vec([red_linear, 0.0, 0.0]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Scope: display (`mntr`) profiles with RGB data and XYZ PCS only. No
//! profile writing, no N-channel color spaces, no tags beyond the ones the
//! model needs.

pub mod colorimetry;
pub mod curve;
pub mod error;
pub mod icc;
pub mod math;
pub mod profile;
pub mod reader;

pub use curve::ToneCurve;
pub use error::{ProfileError, Result};
pub use icc::{TagSignature, TypeSignature};
pub use math::Matrix3x3;
pub use profile::ColorProfile;

/// Version of dispprof
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
