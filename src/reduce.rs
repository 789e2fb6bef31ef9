//! 16-bit to 8-bit channel reduction.

/// How a 16-bit farbfeld channel is reduced to 8 bits.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChannelReduction {
    /// `floor(v * 255 / 65535)`.
    #[default]
    Linear,
    /// `v >> 8`. Matches loaders that keep only the high byte.
    HighByte,
}

impl ChannelReduction {
    /// Reduce a single channel value.
    #[inline]
    pub fn reduce(self, value: u16) -> u8 {
        (self.as_fn())(value)
    }

    /// The reduction as a plain function pointer, resolved once per decode.
    #[inline]
    pub fn as_fn(self) -> fn(u16) -> u8 {
        match self {
            Self::Linear => reduce_linear,
            Self::HighByte => reduce_high_byte,
        }
    }
}

/// Linear rescale of `0..=65535` onto `0..=255`, rounding down.
#[inline]
pub fn reduce_linear(value: u16) -> u8 {
    // max is 65535 * 255, well inside u32
    (u32::from(value) * 255 / 65535) as u8
}

/// Keep the most significant byte.
#[inline]
pub fn reduce_high_byte(value: u16) -> u8 {
    (value >> 8) as u8
}
