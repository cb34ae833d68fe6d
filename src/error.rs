use alloc::string::String;

/// Errors from BMP decoding, encoding, and editing.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("incompatible format: {0}")]
    Incompatible(String),

    #[error("out of range: {0}")]
    OutOfRange(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("buffer too small: need {needed} pixels, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[cfg(feature = "std")]
    #[error("file i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
