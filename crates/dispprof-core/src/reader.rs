//! Big-endian cursor over a fully-buffered ICC profile
//!
//! ICC data is big-endian throughout and mixes sequential reads with random
//! seeks by absolute offset (the tag directory, LUT grid nodes). Modeling the
//! input as an explicit cursor over one byte slice keeps the position
//! unambiguous after every read.
//!
//! Fixed-point encodings (ICC.1:2022 Section 4):
//! - s15Fixed16Number: signed 16.16, value = raw / 65536
//! - u8Fixed8Number: unsigned 8.8, value = raw / 256
//! - 16-bit PCS XYZ: value = raw / 32768

use crate::error::{ProfileError, Result};

/// Cursor over profile bytes with big-endian primitive reads
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Total length of the underlying buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current absolute offset
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move the cursor to an absolute offset
    ///
    /// Seeking past the end is not itself an error; the next read fails.
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Advance the cursor without reading
    pub fn skip(&mut self, n: usize) {
        self.pos += n;
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self.pos.checked_add(n).filter(|&e| e <= self.data.len());
        match end {
            Some(end) => {
                let bytes = &self.data[self.pos..end];
                self.pos = end;
                Ok(bytes)
            }
            None => Err(ProfileError::UnexpectedEof {
                offset: self.pos,
                wanted: n,
            }),
        }
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let b = self.take(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let b = self.take(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Read a 4-byte ASCII signature
    pub fn read_sig(&mut self) -> Result<[u8; 4]> {
        let b = self.take(4)?;
        Ok([b[0], b[1], b[2], b[3]])
    }

    /// Read `n` raw bytes
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.take(n)
    }

    /// s15Fixed16Number
    pub fn read_s15f16(&mut self) -> Result<f64> {
        let b = self.take(4)?;
        let raw = i32::from_be_bytes([b[0], b[1], b[2], b[3]]);
        Ok(raw as f64 / 65536.0)
    }

    /// u8Fixed8Number
    pub fn read_u8f8(&mut self) -> Result<f64> {
        let raw = self.read_u16()?;
        Ok(raw as f64 / 256.0)
    }

    /// 16-bit normalized PCS XYZ component
    pub fn read_xyz16(&mut self) -> Result<f64> {
        let raw = self.read_u16()?;
        Ok(raw as f64 / 32768.0)
    }
}
