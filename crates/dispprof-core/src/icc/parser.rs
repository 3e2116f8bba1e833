//! Tag-table driven decode
//!
//! After header validation the tag directory at 0x84 drives everything:
//! each 12-byte record is bounds-checked, the cursor seeks to the tag data,
//! and the signature picks an extractor. An A2B1 tag switches the decode
//! into LUT mode for the rest of the directory, after which colorant and
//! TRC tags are ignored (the reduction already produced both).

use crate::colorimetry;
use crate::curve::ToneCurve;
use crate::error::{ProfileError, Result};
use crate::icc::header;
use crate::icc::tags::{lut, trc, vcgt, xyz};
use crate::icc::types::TagSignature;
use crate::math::Matrix3x3;
use crate::profile::ColorProfile;
use crate::reader::Reader;

const TAG_COUNT_OFFSET: usize = 0x80;
const TAG_TABLE_OFFSET: usize = 0x84;
const TAG_RECORD_SIZE: usize = 12;

/// rXYZ, gXYZ, bXYZ, rTRC, gTRC, bTRC
const REQUIRED_TAGS: u32 = 6;

/// Per-call decode context
struct Decoder<'a> {
    r: Reader<'a>,
    matrix: Matrix3x3,
    trcs: [Option<ToneCurve>; 3],
    vcgt: Option<[ToneCurve; 3]>,
    lut_mode: bool,
    consumed: u32,
}

/// Decode a display profile from raw ICC bytes
pub fn decode(data: &[u8]) -> Result<ColorProfile> {
    let mut dec = Decoder {
        r: Reader::new(data),
        matrix: Matrix3x3::zero(),
        trcs: [None, None, None],
        vcgt: None,
        lut_mode: false,
        consumed: 0,
    };

    header::validate(&mut dec.r)?;

    dec.r.seek(TAG_COUNT_OFFSET);
    let count = dec.r.read_u32()?;

    for i in 0..count as usize {
        dec.r.seek(TAG_TABLE_OFFSET + TAG_RECORD_SIZE * i);
        let sig = TagSignature(u32::from_be_bytes(dec.r.read_sig()?));
        let offset = dec.r.read_u32()?;
        let size = dec.r.read_u32()?;

        if offset as u64 + size as u64 > data.len() as u64 {
            return Err(ProfileError::TagOutOfBounds {
                tag: sig,
                offset,
                size,
                len: data.len(),
            });
        }

        dec.r.seek(offset as usize);
        dec.dispatch(sig)?;
    }

    dec.finish()
}

impl Decoder<'_> {
    fn dispatch(&mut self, sig: TagSignature) -> Result<()> {
        if sig == TagSignature::A2B1 {
            self.lut_mode = true;
            let model = lut::reduce_lut16(&mut self.r, sig)?;
            self.matrix = model.matrix;
            let [r, g, b] = model.trcs;
            self.trcs = [Some(r), Some(g), Some(b)];
        } else if let Some(channel) = sig.trc_channel() {
            if !self.lut_mode {
                self.trcs[channel] = Some(trc::read_trc(&mut self.r, sig)?);
                self.consumed += 1;
            }
        } else if let Some(channel) = sig.xyz_channel() {
            if !self.lut_mode {
                xyz::read_colorant(&mut self.r, sig, &mut self.matrix, channel)?;
                self.consumed += 1;
            }
        } else if sig == TagSignature::VCGT {
            self.vcgt = Some(vcgt::read_vcgt(&mut self.r)?);
        }
        // Unrecognized tags are ignored
        Ok(())
    }

    fn finish(self) -> Result<ColorProfile> {
        let matrix = if self.lut_mode {
            // The reduction already targets D50 by construction
            self.matrix
        } else {
            if self.consumed != REQUIRED_TAGS {
                return Err(ProfileError::MissingRequiredTags);
            }
            colorimetry::scale_columns_to_d50(&self.matrix)?
        };

        let [r, g, b] = self.trcs;
        let trcs = [
            r.ok_or(ProfileError::MissingRequiredTags)?,
            g.ok_or(ProfileError::MissingRequiredTags)?,
            b.ok_or(ProfileError::MissingRequiredTags)?,
        ];

        Ok(ColorProfile {
            matrix,
            trcs,
            vcgt: self.vcgt,
        })
    }
}
