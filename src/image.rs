use crate::pixel::{ARGB_SIZE, unpack_argb};
use crate::reduce::ChannelReduction;

/// A decoded farbfeld image as packed ARGB8888 words, row-major.
///
/// Each pixel is `A<<24 | R<<16 | G<<8 | B`. Rows are tightly packed, so
/// the stride is always `width * 4` bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedImage {
    pixels: Vec<u32>,
    pub width: u32,
    pub height: u32,
    stride: usize,
    reduction: ChannelReduction,
}

impl DecodedImage {
    pub(crate) fn new(
        pixels: Vec<u32>,
        width: u32,
        height: u32,
        stride: usize,
        reduction: ChannelReduction,
    ) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        debug_assert_eq!(stride / ARGB_SIZE, width as usize);
        Self {
            pixels,
            width,
            height,
            stride,
            reduction,
        }
    }

    /// Access the pixel words.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// The pixel buffer as native-endian bytes, `width * height * 4` long.
    ///
    /// This is the memory layout a native-endian ARGB8888 surface expects.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Bytes per row, `width * 4`.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// One row of pixels.
    pub fn row(&self, y: u32) -> Option<&[u32]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = y as usize * w;
        self.pixels.get(start..start + w)
    }

    /// Channel reduction used to produce this image.
    pub fn reduction(&self) -> ChannelReduction {
        self.reduction
    }

    /// Take ownership of the pixel words.
    pub fn into_pixels(self) -> Vec<u32> {
        self.pixels
    }

    /// Convert to straight RGBA8 pixels.
    #[cfg(feature = "rgb")]
    pub fn to_rgba8(&self) -> Vec<rgb::RGBA8> {
        self.pixels
            .iter()
            .map(|&p| {
                let [a, r, g, b] = unpack_argb(p);
                rgb::RGBA8::new(r, g, b, a)
            })
            .collect()
    }

    /// Zero-copy 2D view of the ARGB words.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, u32> {
        imgref::ImgRef::new(&self.pixels, self.width as usize, self.height as usize)
    }

    /// Convert into an owned 2D buffer without copying.
    #[cfg(feature = "imgref")]
    pub fn into_imgvec(self) -> imgref::ImgVec<u32> {
        imgref::ImgVec::new(self.pixels, self.width as usize, self.height as usize)
    }

    /// Split a pixel into `[a, r, g, b]` bytes.
    pub fn channels(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixel(x, y).map(unpack_argb)
    }
}
