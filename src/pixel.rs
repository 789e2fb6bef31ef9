/// Size of one farbfeld pixel record on the wire.
pub const RECORD_SIZE: usize = 8;

/// Size of one decoded ARGB8888 pixel.
pub const ARGB_SIZE: usize = 4;

/// One farbfeld pixel as stored in the file: 16-bit R, G, B, A.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PixelRecord {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl PixelRecord {
    /// Parse a big-endian RGBA record.
    #[inline]
    pub fn from_be_bytes(bytes: [u8; RECORD_SIZE]) -> Self {
        Self {
            r: u16::from_be_bytes([bytes[0], bytes[1]]),
            g: u16::from_be_bytes([bytes[2], bytes[3]]),
            b: u16::from_be_bytes([bytes[4], bytes[5]]),
            a: u16::from_be_bytes([bytes[6], bytes[7]]),
        }
    }

    /// Reduce every channel with `reduce` and pack as ARGB8888.
    #[inline]
    pub fn to_argb(self, reduce: fn(u16) -> u8) -> u32 {
        pack_argb(reduce(self.a), reduce(self.r), reduce(self.g), reduce(self.b))
    }
}

/// Pack 8-bit channels as `A<<24 | R<<16 | G<<8 | B`.
#[inline]
pub fn pack_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    u32::from_be_bytes([a, r, g, b])
}

/// Split an ARGB8888 word into `[a, r, g, b]`.
#[inline]
pub fn unpack_argb(pixel: u32) -> [u8; 4] {
    pixel.to_be_bytes()
}
