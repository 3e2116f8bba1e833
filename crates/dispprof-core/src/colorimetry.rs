//! Reference white handling
//!
//! The decoded matrix must map unit RGB input exactly to the D50 reference
//! white, the ICC profile connection space illuminant. Rescaling is done per
//! column: the scale factors are M⁻¹ × white, applied as M × diag(s), which
//! makes M × [1,1,1] reproduce the white point by construction.

use crate::error::{ProfileError, Result};
use crate::math::Matrix3x3;

/// ICC PCS illuminant (CIE D50), per ICC.1:2022 7.2.16
pub const D50: [f64; 3] = [0.9642, 1.0, 0.8249];

/// Rescale the columns of `m` so that `m × [1,1,1]` equals `white`
///
/// Fails if `m` is not invertible.
pub fn scale_columns_to_white(m: &Matrix3x3, white: [f64; 3]) -> Result<Matrix3x3> {
    let inv = m.inverse().ok_or(ProfileError::DegenerateMatrix)?;
    let scale = inv.multiply_vec(white);
    Ok(m.multiply(&Matrix3x3::diagonal(scale)))
}

/// Rescale the columns of `m` to the D50 reference white
pub fn scale_columns_to_d50(m: &Matrix3x3) -> Result<Matrix3x3> {
    scale_columns_to_white(m, D50)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_to_d50_white_point() {
        // sRGB primaries at their native D65 white
        let srgb = Matrix3x3::new([
            [0.4124564, 0.3575761, 0.1804375],
            [0.2126729, 0.7151522, 0.0721750],
            [0.0193339, 0.1191920, 0.9503041],
        ]);

        let adapted = scale_columns_to_d50(&srgb).unwrap();
        let white = adapted.multiply_vec([1.0, 1.0, 1.0]);
        assert!((white[0] - D50[0]).abs() < 1e-9);
        assert!((white[1] - D50[1]).abs() < 1e-9);
        assert!((white[2] - D50[2]).abs() < 1e-9);
    }

    #[test]
    fn test_scaling_preserves_column_direction() {
        let srgb = Matrix3x3::new([
            [0.4124564, 0.3575761, 0.1804375],
            [0.2126729, 0.7151522, 0.0721750],
            [0.0193339, 0.1191920, 0.9503041],
        ]);
        let adapted = scale_columns_to_d50(&srgb).unwrap();

        // Each column is only rescaled, never rotated
        for col in 0..3 {
            let a = srgb.column(col);
            let b = adapted.column(col);
            let ratio = b[0] / a[0];
            assert!((b[1] / a[1] - ratio).abs() < 1e-9);
            assert!((b[2] / a[2] - ratio).abs() < 1e-9);
        }
    }

    #[test]
    fn test_singular_matrix_rejected() {
        let singular = Matrix3x3::new([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.5, 1.0, 1.5]]);
        assert_eq!(
            scale_columns_to_d50(&singular).unwrap_err(),
            ProfileError::DegenerateMatrix
        );
    }
}
