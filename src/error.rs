use enough::StopReason;

/// Errors from farbfeld decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FarbfeldError {
    /// The first 8 bytes are not `"farbfeld"`, or the stream ended before them.
    ///
    /// This is the only error a caller probing several formats should treat
    /// as "not this format" and move on.
    #[error("invalid farbfeld magic")]
    InvalidMagic,

    #[error("farbfeld header truncated: need 16 bytes")]
    TruncatedHeader,

    #[error("dimensions overflow addressable size: {width}x{height}")]
    DimensionOverflow { width: u32, height: u32 },

    #[error("pixel data truncated: {remaining} pixels remaining")]
    TruncatedPixelData { remaining: u64 },

    #[error("failed to allocate {bytes} bytes for pixel buffer")]
    AllocationFailure { bytes: usize },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl FarbfeldError {
    /// Whether a caller may reasonably try another loader after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FarbfeldError::InvalidMagic)
    }
}

impl From<StopReason> for FarbfeldError {
    fn from(r: StopReason) -> Self {
        FarbfeldError::Cancelled(r)
    }
}
