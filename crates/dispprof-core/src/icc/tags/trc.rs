//! Tone reproduction curve (curveType) tags
//!
//! A curv tag is either a single u8Fixed8 gamma exponent (count == 1) or a
//! table of uint16 samples. See ICC.1:2022 Section 10.6.

use crate::curve::ToneCurve;
use crate::error::{ProfileError, Result};
use crate::icc::types::{TagSignature, TypeSignature};
use crate::reader::Reader;

/// Read a TRC tag into a tone curve
///
/// The reader must be positioned at the start of the tag data.
pub fn read_trc(r: &mut Reader<'_>, sig: TagSignature) -> Result<ToneCurve> {
    let type_sig = TypeSignature(u32::from_be_bytes(r.read_sig()?));
    if type_sig != TypeSignature::CURVE {
        return Err(ProfileError::NotCurveType(sig));
    }
    r.skip(4); // reserved

    let count = r.read_u32()?;
    if count == 1 {
        let gamma = r.read_u8f8()?;
        return Ok(ToneCurve::Gamma(gamma));
    }

    let mut table = Vec::with_capacity(count as usize);
    for _ in 0..count {
        table.push(r.read_u16()?);
    }
    Ok(ToneCurve::lut(table))
}
