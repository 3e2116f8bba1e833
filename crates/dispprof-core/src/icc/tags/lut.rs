//! LUT16 (mft2) reduction
//!
//! An A2B1 tag stores the device response as a dense 3-D grid with linear
//! pre/post tables. The decoder reduces it to the separable matrix + TRC
//! model by walking a handful of distinguished grid nodes:
//!
//! - the three corners where one axis is at its maximum and the others at
//!   zero give the primaries;
//! - the main diagonal gives the grayscale ramp, whose first node is the
//!   black point;
//! - black-subtracted, luminance-normalized primaries form the columns of an
//!   intermediate matrix M′, rescaled per column by `M′⁻¹ × D50` so the
//!   final matrix maps unit RGB white exactly to D50;
//! - each tone curve is recovered by pushing the gray-axis response through
//!   the output tables and back through `M⁻¹`.
//!
//! The reduction is exact when the grid itself was generated from a
//! matrix + TRC model, which holds for display profiles.
//!
//! Grid node layout: the first input channel (R) varies slowest, so the
//! corner at flat index `(g−1)·g^a` belongs to primary slot `2−a`. That
//! reversed correspondence reflects the grid's memory order and must not be
//! "corrected" to ascending.

use crate::colorimetry::D50;
use crate::curve::ToneCurve;
use crate::error::{ProfileError, Result};
use crate::icc::types::{TagSignature, TypeSignature};
use crate::math::matrix::sub;
use crate::math::Matrix3x3;
use crate::reader::Reader;

/// Matrix + per-channel curves reconstructed from an mft2 grid
#[derive(Debug)]
pub struct LutModel {
    pub matrix: Matrix3x3,
    pub trcs: [ToneCurve; 3],
}

/// Reduce an A2B1 (lut16Type) tag to a matrix + TRC model
///
/// The reader must be positioned at the start of the tag data.
pub fn reduce_lut16(r: &mut Reader<'_>, sig: TagSignature) -> Result<LutModel> {
    let type_sig = TypeSignature(u32::from_be_bytes(r.read_sig()?));
    if type_sig != TypeSignature::LUT16 {
        return Err(ProfileError::NotLut16Type(sig));
    }
    r.skip(4); // reserved

    let input_channels = r.read_u8()?;
    let output_channels = r.read_u8()?;
    if input_channels != 3 || output_channels != 3 {
        return Err(ProfileError::ChannelCountMismatch {
            inputs: input_channels,
            outputs: output_channels,
        });
    }

    let grid_points = r.read_u8()?;
    if grid_points < 2 {
        return Err(ProfileError::InvalidLutGrid(grid_points));
    }
    let g = grid_points as usize;
    r.skip(1); // padding

    // Legacy PCS matrix, unused by this model
    for _ in 0..9 {
        r.read_s15f16()?;
    }

    let input_entries = r.read_u16()? as usize;
    let output_entries = r.read_u16()? as usize;

    // Pre-linearization tables, applied before the grid
    let mut input = [const { Vec::new() }; 3];
    for table in &mut input {
        table.reserve(input_entries);
        for _ in 0..input_entries {
            table.push(r.read_u16()?);
        }
    }

    let grid_base = r.position();

    // Primaries from the max-axis corners; the fastest-varying axis is the
    // last device channel, hence the descending slot order.
    let mut primaries = [[0.0f64; 3]; 3];
    let mut corner = g - 1;
    for slot in 0..3 {
        r.seek(grid_base + 2 * 3 * corner);
        let mut p = [0.0f64; 3];
        for v in &mut p {
            *v = r.read_xyz16()?;
        }
        primaries[2 - slot] = p;
        corner *= g;
    }

    // Grayscale ramp from the main diagonal, one curve per output channel
    let diagonal_stride = g * g + g + 1;
    let mut gray_tables: [Vec<u16>; 3] = std::array::from_fn(|_| vec![0u16; g]);
    for i in 0..g {
        r.seek(grid_base + 2 * 3 * i * diagonal_stride);
        for table in &mut gray_tables {
            table[i] = r.read_u16()?;
        }
    }
    let grayscale = gray_tables.map(|t| ToneCurve::lut_scaled(t, 32768.0));

    let black = [
        grayscale[0].sample(0.0),
        grayscale[1].sample(0.0),
        grayscale[2].sample(0.0),
    ];

    // M′ columns: black-subtracted primaries, each divided by its own
    // luminance component to strip the arbitrary per-column scale
    let mut mprime = Matrix3x3::zero();
    for (col, &primary) in primaries.iter().enumerate() {
        let pure = sub(primary, black);
        if pure[1].abs() < 1e-12 {
            return Err(ProfileError::DegenerateMatrix);
        }
        mprime.set_column(col, [pure[0] / pure[1], 1.0, pure[2] / pure[1]]);
    }

    // Per-column scales that pin unit RGB white to D50
    let scale = mprime
        .inverse()
        .ok_or(ProfileError::DegenerateMatrix)?
        .multiply_vec(D50);
    let matrix = mprime.multiply(&Matrix3x3::diagonal(scale));
    let minv = matrix.inverse().ok_or(ProfileError::DegenerateMatrix)?;

    // Post-linearization tables follow the full grid
    r.seek(grid_base + 2 * 3 * g * g * g);
    let mut output = [const { Vec::new() }; 3];
    for table in &mut output {
        table.reserve(output_entries);
        for _ in 0..output_entries {
            table.push(r.read_u16()?);
        }
    }
    let output = output.map(ToneCurve::lut);

    // Compose input table → gray ramp → output table along the neutral axis,
    // then invert the matrix to recover the per-channel signal that would
    // have produced the same output
    let mut samples: [Vec<f64>; 3] = std::array::from_fn(|_| vec![0.0f64; input_entries]);
    for j in 0..input_entries.saturating_sub(1) {
        let mut xyz = [0.0f64; 3];
        for k in 0..3 {
            let x = input[k][j] as f64 / 65535.0;
            xyz[k] = output[k].sample(grayscale[k].sample(x));
        }
        let tone = minv.multiply_vec(xyz);
        for k in 0..3 {
            samples[k][j] = tone[k].max(0.0);
        }
    }
    for channel in &mut samples {
        if let Some(last) = channel.last_mut() {
            *last = 1.0;
        }
    }

    Ok(LutModel {
        matrix,
        trcs: samples.map(ToneCurve::Samples),
    })
}
