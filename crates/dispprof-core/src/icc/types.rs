//! ICC tag and type signatures
//!
//! Signatures are 4-byte ASCII codes stored big-endian.

use std::fmt;

/// ICC tag signature (4-byte ASCII code)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagSignature(pub u32);

impl TagSignature {
    pub const fn from_bytes(b: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(b))
    }

    pub const A2B1: Self = Self::from_bytes(*b"A2B1");
    pub const VCGT: Self = Self::from_bytes(*b"vcgt");
    pub const RED_COLORANT: Self = Self::from_bytes(*b"rXYZ");
    pub const GREEN_COLORANT: Self = Self::from_bytes(*b"gXYZ");
    pub const BLUE_COLORANT: Self = Self::from_bytes(*b"bXYZ");
    pub const RED_TRC: Self = Self::from_bytes(*b"rTRC");
    pub const GREEN_TRC: Self = Self::from_bytes(*b"gTRC");
    pub const BLUE_TRC: Self = Self::from_bytes(*b"bTRC");

    /// Channel slot for the leading r/g/b byte, if any
    fn channel(&self) -> Option<usize> {
        match self.0.to_be_bytes()[0] {
            b'r' => Some(0),
            b'g' => Some(1),
            b'b' => Some(2),
            _ => None,
        }
    }

    /// Channel slot for an r/g/b tag with the `TRC` suffix
    pub fn trc_channel(&self) -> Option<usize> {
        let b = self.0.to_be_bytes();
        if &b[1..4] == b"TRC" { self.channel() } else { None }
    }

    /// Channel slot for an r/g/b tag with the `XYZ` suffix
    pub fn xyz_channel(&self) -> Option<usize> {
        let b = self.0.to_be_bytes();
        if &b[1..4] == b"XYZ" { self.channel() } else { None }
    }
}

impl fmt::Display for TagSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.0.to_be_bytes();
        for b in bytes {
            if b.is_ascii_graphic() || b == b' ' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{b:02X}")?;
            }
        }
        Ok(())
    }
}

/// ICC type signature for tag payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSignature(pub u32);

impl TypeSignature {
    pub const fn from_bytes(b: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(b))
    }

    pub const XYZ: Self = Self::from_bytes(*b"XYZ ");
    pub const CURVE: Self = Self::from_bytes(*b"curv");
    pub const LUT16: Self = Self::from_bytes(*b"mft2");
}
