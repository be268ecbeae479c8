//! Read-only view of the binary image under analysis.
//!
//! Mapping or reading the image file into memory is the frontend's job; the
//! core only borrows the resulting buffer. Addresses are 32-bit throughout
//! the pipeline, so construction fails for buffers past 4 GiB rather than
//! silently truncating offsets.

use crate::error::ScanError;

/// Immutable byte buffer plus its length as a 32-bit address.
#[derive(Debug, Clone, Copy)]
pub struct Image<'a> {
    bytes: &'a [u8],
    size: u32,
}

impl<'a> Image<'a> {
    /// Wrap an already-loaded buffer.
    pub fn new(bytes: &'a [u8]) -> Result<Self, ScanError> {
        let size = u32::try_from(bytes.len())
            .map_err(|_| ScanError::ImageTooLarge(bytes.len() as u64))?;
        Ok(Self { bytes, size })
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Borrow the half-open range `[start, end)`.
    pub fn slice(&self, start: u32, end: u32) -> Result<&'a [u8], ScanError> {
        if end <= start || end > self.size {
            return Err(ScanError::InvalidRange { start, end, size: self.size });
        }
        Ok(&self.bytes[start as usize..end as usize])
    }
}
