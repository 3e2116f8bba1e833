//! ICC header validation
//!
//! Only the three header fields the model depends on are checked: the
//! container magic, the device class, and the data/connection color spaces.
//! See ICC.1:2022 Section 7.2.

use crate::error::{ProfileError, Result};
use crate::reader::Reader;

/// Profile file signature at offset 0x24
pub const PROFILE_MAGIC: &[u8; 4] = b"acsp";

/// Display device class at offset 0x0C
pub const DISPLAY_CLASS: &[u8; 4] = b"mntr";

/// Data color space + PCS at offset 0x10
pub const RGB_XYZ_SPACES: &[u8; 8] = b"RGB XYZ ";

/// Validate the container magic, device class, and color-space signature
pub fn validate(r: &mut Reader<'_>) -> Result<()> {
    r.seek(0x24);
    if r.read_sig()? != *PROFILE_MAGIC {
        return Err(ProfileError::NotAnIccProfile);
    }

    r.seek(0x0C);
    if r.read_sig()? != *DISPLAY_CLASS {
        return Err(ProfileError::NotADisplayProfile);
    }

    r.seek(0x10);
    if r.read_bytes(8)? != RGB_XYZ_SPACES {
        return Err(ProfileError::NotRgbXyzProfile);
    }

    Ok(())
}
