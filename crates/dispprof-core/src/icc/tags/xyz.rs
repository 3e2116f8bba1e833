//! Colorant (XYZType) tags
//!
//! rXYZ/gXYZ/bXYZ each carry one s15Fixed16 XYZ triple: the tristimulus
//! value of the corresponding primary at the profile's native white point.
//! See ICC.1:2022 Section 10.31.

use crate::error::{ProfileError, Result};
use crate::icc::types::{TagSignature, TypeSignature};
use crate::math::Matrix3x3;
use crate::reader::Reader;

/// Read a colorant tag into matrix column `channel` (rows X, Y, Z)
///
/// The reader must be positioned at the start of the tag data.
pub fn read_colorant(
    r: &mut Reader<'_>,
    sig: TagSignature,
    matrix: &mut Matrix3x3,
    channel: usize,
) -> Result<()> {
    let type_sig = TypeSignature(u32::from_be_bytes(r.read_sig()?));
    if type_sig != TypeSignature::XYZ {
        return Err(ProfileError::NotXyzType(sig));
    }
    r.skip(4); // reserved

    for row in 0..3 {
        matrix[row][channel] = r.read_s15f16()?;
    }
    Ok(())
}
