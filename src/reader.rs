//! Bounds-checked sequential reads over an [`std::io::Read`] stream.

use std::io::{self, ErrorKind, Read};

pub(crate) struct ByteReader<R> {
    inner: R,
    /// Bytes consumed so far.
    pos: u64,
}

impl<R: Read> ByteReader<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self { inner, pos: 0 }
    }

    pub(crate) fn position(&self) -> u64 {
        self.pos
    }

    /// Read exactly `N` bytes. A short stream yields `ErrorKind::UnexpectedEof`.
    pub(crate) fn read_array<const N: usize>(&mut self) -> io::Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.inner.read_exact(&mut buf)?;
        self.pos += N as u64;
        Ok(buf)
    }

    pub(crate) fn read_u32_be(&mut self) -> io::Result<u32> {
        self.read_array::<4>().map(u32::from_be_bytes)
    }

    /// Fill `buf` as far as the stream allows.
    ///
    /// Returns the number of bytes written, which is less than `buf.len()` only
    /// at end of stream. On an I/O error the bytes already read are reported
    /// alongside it so callers can account for them.
    pub(crate) fn fill(&mut self, buf: &mut [u8]) -> Result<usize, (usize, io::Error)> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.pos += filled as u64;
                    return Err((filled, e));
                }
            }
        }
        self.pos += filled as u64;
        Ok(filled)
    }
}
