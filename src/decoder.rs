//! Farbfeld to ARGB8888 decoder.
//!
//! Reads the header, validates the output size, then converts pixel records
//! in fixed-size chunks straight into the output buffer.

use std::io::Read;

use enough::{Stop, Unstoppable};

use crate::error::FarbfeldError;
use crate::header::FarbfeldHeader;
use crate::image::DecodedImage;
use crate::limits::Limits;
use crate::pixel::{PixelRecord, RECORD_SIZE};
use crate::reader::ByteReader;
use crate::reduce::ChannelReduction;

/// Pixel records converted per read; also the cancellation check interval.
const CHUNK_RECORDS: usize = 4096;

/// Decodes farbfeld streams into [`DecodedImage`]s.
///
/// The decoder only holds configuration, so one instance can serve any
/// number of decodes, including from several threads at once.
///
/// ```
/// use zenfarbfeld::{ChannelReduction, FarbfeldDecoder};
///
/// let mut data = b"farbfeld".to_vec();
/// data.extend_from_slice(&1u32.to_be_bytes());
/// data.extend_from_slice(&1u32.to_be_bytes());
/// data.extend_from_slice(&[0x11, 0x11, 0x22, 0x22, 0x33, 0x33, 0x44, 0x44]);
///
/// let image = FarbfeldDecoder::new()
///     .with_reduction(ChannelReduction::Linear)
///     .decode(&data[..])?;
/// assert_eq!(image.pixels(), &[0x4411_2233]);
/// # Ok::<(), zenfarbfeld::FarbfeldError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct FarbfeldDecoder {
    reduction: ChannelReduction,
    limits: Option<Limits>,
}

impl FarbfeldDecoder {
    /// Linear channel reduction, no limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select how 16-bit channels are reduced to 8 bits.
    pub fn with_reduction(mut self, reduction: ChannelReduction) -> Self {
        self.reduction = reduction;
        self
    }

    /// Reject images exceeding `limits` before allocating.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Reduction applied to every channel; also recorded on each [`DecodedImage`].
    pub fn reduction(&self) -> ChannelReduction {
        self.reduction
    }

    /// Limits checked against each header, if any were set.
    pub fn limits(&self) -> Option<&Limits> {
        self.limits.as_ref()
    }

    /// Decode a complete farbfeld image from `reader`.
    ///
    /// Bytes after the last declared pixel are left unread.
    pub fn decode<R: Read>(&self, reader: R) -> Result<DecodedImage, FarbfeldError> {
        self.decode_stoppable(reader, Unstoppable)
    }

    /// Like [`decode`](Self::decode), checking `stop` between pixel chunks.
    pub fn decode_stoppable<R: Read>(
        &self,
        reader: R,
        stop: impl Stop,
    ) -> Result<DecodedImage, FarbfeldError> {
        let mut reader = ByteReader::new(reader);
        let header = FarbfeldHeader::read_from(&mut reader)?;
        log::trace!("farbfeld dimensions: {}x{}", header.width, header.height);

        let pixel_count = header.pixel_count()?;
        let stride = header.row_stride()?;
        let out_bytes = header.output_len()?;
        if let Some(limits) = &self.limits {
            limits.check(&header, out_bytes)?;
        }
        stop.check()?;

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(pixel_count)
            .map_err(|_| FarbfeldError::AllocationFailure { bytes: out_bytes })?;

        read_pixels(
            &mut reader,
            &mut pixels,
            pixel_count,
            self.reduction.as_fn(),
            &stop,
        )?;

        Ok(DecodedImage::new(
            pixels,
            header.width,
            header.height,
            stride,
            self.reduction,
        ))
    }
}

/// Append `count` converted pixels to `out`, which must have the capacity reserved.
fn read_pixels<R: Read>(
    reader: &mut ByteReader<R>,
    out: &mut Vec<u32>,
    count: usize,
    reduce: fn(u16) -> u8,
    stop: &dyn Stop,
) -> Result<(), FarbfeldError> {
    let mut chunk = vec![0u8; count.min(CHUNK_RECORDS) * RECORD_SIZE];

    while out.len() < count {
        stop.check()?;

        let want = (count - out.len()).min(CHUNK_RECORDS) * RECORD_SIZE;
        let (filled, io_err) = match reader.fill(&mut chunk[..want]) {
            Ok(n) => (n, None),
            Err((n, e)) => (n, Some(e)),
        };

        // a trailing partial record counts as missing
        let (records, _) = chunk[..filled].as_chunks::<RECORD_SIZE>();
        out.extend(
            records
                .iter()
                .map(|&record| PixelRecord::from_be_bytes(record).to_argb(reduce)),
        );

        if filled < want {
            let remaining = (count - out.len()) as u64;
            match io_err {
                Some(e) => log::debug!(
                    "read error at byte {} with {remaining} pixels remaining: {e}",
                    reader.position()
                ),
                None => log::debug!(
                    "stream ended at byte {} with {remaining} pixels remaining",
                    reader.position()
                ),
            }
            return Err(FarbfeldError::TruncatedPixelData { remaining });
        }
    }
    Ok(())
}
