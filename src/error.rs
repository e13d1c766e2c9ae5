use alloc::string::String;
use enough::StopReason;

/// Errors from BMP decoding, pixel access, and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    /// Reading or writing the image file failed.
    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The buffer does not start with the `BM` signature.
    #[error("invalid format: missing BM signature")]
    InvalidFormat,

    #[error("unsupported bit depth: {0} (expected 24 or 32)")]
    UnsupportedDepth(u16),

    #[error("allocation of {bytes} bytes failed")]
    AllocationFailure { bytes: usize },

    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} image")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for BitmapError {
    fn from(r: StopReason) -> Self {
        BitmapError::Cancelled(r)
    }
}

