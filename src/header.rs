//! Farbfeld header: 8-byte magic, then width and height as u32 big-endian.

use std::io::{ErrorKind, Read};

use crate::error::FarbfeldError;
use crate::pixel::ARGB_SIZE;
use crate::reader::ByteReader;

/// The farbfeld signature.
pub const MAGIC: &[u8; 8] = b"farbfeld";

/// Magic plus two u32 dimensions.
pub const HEADER_SIZE: usize = 8 /*magic*/ + 4 /*width*/ + 4 /*height*/;

/// Dimensions read from a farbfeld header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FarbfeldHeader {
    pub width: u32,
    pub height: u32,
}

impl FarbfeldHeader {
    /// Parse the 16-byte header at the start of `data`.
    ///
    /// Bytes past the header are not inspected.
    pub fn parse(data: &[u8]) -> Result<Self, FarbfeldError> {
        match data.get(..MAGIC.len()) {
            Some(magic) if magic == MAGIC => {}
            _ => return Err(FarbfeldError::InvalidMagic),
        }
        let dims = data
            .get(MAGIC.len()..HEADER_SIZE)
            .ok_or(FarbfeldError::TruncatedHeader)?;
        Ok(Self {
            width: u32::from_be_bytes([dims[0], dims[1], dims[2], dims[3]]),
            height: u32::from_be_bytes([dims[4], dims[5], dims[6], dims[7]]),
        })
    }

    /// Read the header from a stream, leaving it positioned at the first pixel record.
    pub(crate) fn read_from<R: Read>(reader: &mut ByteReader<R>) -> Result<Self, FarbfeldError> {
        let magic = reader.read_array::<8>().map_err(|e| match e.kind() {
            ErrorKind::UnexpectedEof => FarbfeldError::InvalidMagic,
            _ => FarbfeldError::Io(e),
        })?;
        if &magic != MAGIC {
            log::debug!("invalid farbfeld magic {magic:02x?}");
            return Err(FarbfeldError::InvalidMagic);
        }
        let eof_is_truncation = |e: std::io::Error| match e.kind() {
            ErrorKind::UnexpectedEof => FarbfeldError::TruncatedHeader,
            _ => FarbfeldError::Io(e),
        };
        let width = reader.read_u32_be().map_err(eof_is_truncation)?;
        let height = reader.read_u32_be().map_err(eof_is_truncation)?;
        Ok(Self { width, height })
    }

    /// Number of pixels, or `DimensionOverflow` if it does not fit in `usize`.
    pub fn pixel_count(&self) -> Result<usize, FarbfeldError> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .ok_or_else(|| self.overflow())
    }

    /// Row stride of the decoded buffer in bytes.
    ///
    /// Checked on its own: a zero-height image still has a stride, and
    /// `u32::MAX * 4` does not fit a 32-bit `usize`.
    pub fn row_stride(&self) -> Result<usize, FarbfeldError> {
        (self.width as usize)
            .checked_mul(ARGB_SIZE)
            .ok_or_else(|| self.overflow())
    }

    /// Byte length of the decoded ARGB8888 buffer.
    ///
    /// Fails with `DimensionOverflow` when the length or the row stride is not
    /// addressable, which includes anything above `isize::MAX`.
    pub fn output_len(&self) -> Result<usize, FarbfeldError> {
        self.row_stride()?;
        self.pixel_count()?
            .checked_mul(ARGB_SIZE)
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or_else(|| self.overflow())
    }

    fn overflow(&self) -> FarbfeldError {
        FarbfeldError::DimensionOverflow {
            width: self.width,
            height: self.height,
        }
    }
}

/// Whether `data` starts with the farbfeld magic.
pub fn is_farbfeld(data: &[u8]) -> bool {
    data.starts_with(MAGIC)
}

/// Read dimensions without touching pixel data.
pub fn probe(data: &[u8]) -> Result<FarbfeldHeader, FarbfeldError> {
    FarbfeldHeader::parse(data)
}
