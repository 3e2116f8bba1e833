//! Decoded display-profile model

use crate::curve::ToneCurve;
use crate::error::Result;
use crate::icc::parser;
use crate::math::Matrix3x3;

/// The colorimetric model reconstructed from one display profile
///
/// `matrix` maps linear RGB to CIE XYZ adapted to the D50 reference white;
/// its columns correspond to the R, G, B channels. `trcs` map normalized
/// device input to linear light, in the same channel order, so matrix and
/// curves together model the same device. `vcgt` is the optional video-card
/// gamma table, independent of the matrix/TRC model.
///
/// The value is immutable after decoding and owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorProfile {
    pub matrix: Matrix3x3,
    pub trcs: [ToneCurve; 3],
    pub vcgt: Option<[ToneCurve; 3]>,
}

impl ColorProfile {
    /// Decode a profile from raw ICC bytes
    ///
    /// Fails fast on the first structural or tag-level problem; no partial
    /// profile is ever returned.
    pub fn decode(data: &[u8]) -> Result<Self> {
        parser::decode(data)
    }
}
