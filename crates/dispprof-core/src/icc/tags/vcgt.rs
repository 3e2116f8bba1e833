//! Video-card gamma table (vcgt) tags
//!
//! The vcgt tag carries a hardware calibration ramp independent of the
//! matrix/TRC model. Only the numeric-table form (type 0) with 3 channels
//! and 8- or 16-bit entries is supported; 8-bit entries are widened to the
//! full 16-bit range.

use crate::curve::ToneCurve;
use crate::error::{ProfileError, Result};
use crate::reader::Reader;

/// Read a vcgt tag into three per-channel lookup curves
///
/// The reader must be positioned at the start of the tag data.
pub fn read_vcgt(r: &mut Reader<'_>) -> Result<[ToneCurve; 3]> {
    r.skip(4); // type signature
    r.skip(4); // reserved

    let table_type = r.read_u32()?;
    if table_type != 0 {
        return Err(ProfileError::UnsupportedVcgtType(table_type));
    }

    let channels = r.read_u16()?;
    let entries = r.read_u16()?;
    let entry_size = r.read_u16()?;

    if channels != 3 {
        return Err(ProfileError::UnsupportedChannelCount(channels));
    }
    if entry_size != 1 && entry_size != 2 {
        return Err(ProfileError::UnsupportedEntrySize(entry_size));
    }

    let mut curves = [const { Vec::new() }; 3];
    for table in &mut curves {
        table.reserve(entries as usize);
        for _ in 0..entries {
            let value = match entry_size {
                1 => (r.read_u8()? as u32 * 65535 / 255) as u16,
                _ => r.read_u16()?,
            };
            table.push(value);
        }
    }

    Ok(curves.map(ToneCurve::lut))
}
