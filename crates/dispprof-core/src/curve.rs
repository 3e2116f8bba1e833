//! Tone-response curves
//!
//! A tone curve is a monotone-nondecreasing mapping from normalized device
//! input to linear light, approximately [0,1] → [0,1]. ICC profiles encode
//! them three ways, so the curve is a tagged union with a single sampling
//! capability instead of a trait hierarchy.

/// A sampled or parametric tone-response curve
#[derive(Debug, Clone, PartialEq)]
pub enum ToneCurve {
    /// Power-law curve: y = x^exponent
    Gamma(f64),
    /// Uniformly-sampled uint16 lookup table; `max` is the domain scale the
    /// raw values are normalized by (65535 for device tables, 32768 for
    /// PCS-encoded grayscale ramps)
    Lut { table: Vec<u16>, max: f64 },
    /// Uniformly-sampled f64 curve over [0, 1]
    Samples(Vec<f64>),
}

impl ToneCurve {
    /// Lookup curve over the full uint16 range
    pub fn lut(table: Vec<u16>) -> Self {
        Self::Lut {
            table,
            max: 65535.0,
        }
    }

    /// Lookup curve with an explicit domain scale
    pub fn lut_scaled(table: Vec<u16>, max: f64) -> Self {
        Self::Lut { table, max }
    }

    /// Evaluate the curve at `x`, clamped to [0, 1]
    ///
    /// Sampled variants linearly interpolate between bracketing entries.
    pub fn sample(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);

        match self {
            Self::Gamma(g) => x.powf(*g),
            Self::Lut { table, max } => {
                if table.is_empty() {
                    return x;
                }
                if table.len() == 1 {
                    return table[0] as f64 / max;
                }
                interpolate(x, table.len(), |i| table[i] as f64) / max
            }
            Self::Samples(samples) => {
                if samples.is_empty() {
                    return x;
                }
                if samples.len() == 1 {
                    return samples[0];
                }
                interpolate(x, samples.len(), |i| samples[i])
            }
        }
    }
}

/// Linear interpolation over `n` uniformly spaced samples of `f` at `x` in [0, 1]
fn interpolate(x: f64, n: usize, f: impl Fn(usize) -> f64) -> f64 {
    let pos = x * (n - 1) as f64;
    let idx = pos.floor() as usize;
    if idx >= n - 1 {
        return f(n - 1);
    }
    let frac = pos - idx as f64;
    let v0 = f(idx);
    let v1 = f(idx + 1);
    v0 + frac * (v1 - v0)
}
