use crate::error::FarbfeldError;
use crate::header::FarbfeldHeader;

/// Caps applied to a header before its pixel buffer is allocated.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the ARGB output buffer.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Reject `header` if any cap is exceeded.
    ///
    /// `output_len` is the already overflow-checked size of the ARGB buffer.
    pub(crate) fn check(
        &self,
        header: &FarbfeldHeader,
        output_len: usize,
    ) -> Result<(), FarbfeldError> {
        let FarbfeldHeader { width, height } = *header;
        let pixels = u64::from(width) * u64::from(height);
        let bytes = output_len as u64;

        let exceeded = |what: &str, value: u64, cap: Option<u64>| match cap {
            Some(cap) if value > cap => Err(FarbfeldError::LimitExceeded(format!(
                "{what} {value} exceeds limit {cap} for {width}x{height} image"
            ))),
            _ => Ok(()),
        };
        exceeded("width", u64::from(width), self.max_width)?;
        exceeded("height", u64::from(height), self.max_height)?;
        exceeded("pixel count", pixels, self.max_pixels)?;
        exceeded("output bytes", bytes, self.max_memory_bytes)
    }
}
