//! Error types for dispprof

use thiserror::Error;

use crate::icc::types::TagSignature;

/// Result type for decode operations
pub type Result<T> = std::result::Result<T, ProfileError>;

/// Errors that can occur when decoding a display profile
///
/// Every variant is fail-fast: decoding aborts immediately and no partial
/// profile is returned.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ProfileError {
    /// Profile signature at offset 0x24 is not `acsp`
    #[error("not an ICC profile")]
    NotAnIccProfile,

    /// Device class at offset 0x0C is not `mntr`
    #[error("not a display device profile")]
    NotADisplayProfile,

    /// Color space / PCS at offset 0x10 is not `RGB XYZ `
    #[error("not an RGB profile with XYZ PCS")]
    NotRgbXyzProfile,

    /// A TRC tag whose type field is not `curv`
    #[error("'{0}' is not of curveType")]
    NotCurveType(TagSignature),

    /// A colorant tag whose type field is not `XYZ `
    #[error("'{0}' is not of XYZType")]
    NotXyzType(TagSignature),

    /// An A2B1 tag whose type field is not `mft2`
    #[error("'{0}' is not of lut16Type")]
    NotLut16Type(TagSignature),

    /// LUT tag with other than 3 input and 3 output channels
    #[error("LUT must have 3 input and 3 output channels (got {inputs} in, {outputs} out)")]
    ChannelCountMismatch { inputs: u8, outputs: u8 },

    /// Matrix+TRC profile without all of rXYZ/gXYZ/bXYZ/rTRC/gTRC/bTRC
    #[error("missing required tags for curves + matrix profile")]
    MissingRequiredTags,

    /// VCGT with an embedded-table type other than 0
    #[error("only VCGT table type 0 is supported (got {0})")]
    UnsupportedVcgtType(u32),

    /// VCGT with other than 3 channels
    #[error("only VCGT with 3 channels is supported (got {0})")]
    UnsupportedChannelCount(u16),

    /// VCGT with an entry size other than 1 or 2 bytes
    #[error("only 8 and 16 bit VCGT entries are supported (got {0} bytes)")]
    UnsupportedEntrySize(u16),

    /// A read past the end of the profile data
    #[error("unexpected end of profile data: {wanted} bytes at offset {offset}")]
    UnexpectedEof { offset: usize, wanted: usize },

    /// Tag directory entry pointing outside the profile data
    #[error("tag '{tag}' out of bounds: offset {offset} + size {size} > profile size {len}")]
    TagOutOfBounds {
        tag: TagSignature,
        offset: u32,
        size: u32,
        len: usize,
    },

    /// LUT grid too coarse to carry primaries distinct from black
    #[error("LUT grid must have at least 2 points per axis (got {0})")]
    InvalidLutGrid(u8),

    /// Colorant matrix that cannot be inverted (or a primary with no
    /// luminance), so the white-point normalization is undefined
    #[error("degenerate colorant matrix")]
    DegenerateMatrix,
}
