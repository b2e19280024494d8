use alloc::string::String;
use enough::StopReason;

/// The input is not a BMP variant this crate converts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FormatError {
    #[error("not a BMP file (missing BM signature)")]
    NotABitmap,

    #[error("unsupported BMP header size {size} (expected BITMAPINFOHEADER or larger)")]
    UnsupportedHeader { size: u32 },

    #[error("unsupported plane count: {planes}")]
    UnsupportedPlanes { planes: u16 },

    #[error("expected 24- or 32-bit BMP, got {bits}")]
    UnsupportedDepth { bits: u16 },

    #[error("unsupported compression: {method}")]
    UnsupportedCompression { method: u32 },

    #[error("BMP has zero width or height")]
    EmptyImage,

    #[error("pixel data offset {offset} lies inside the {header_end}-byte header")]
    InvalidPixelOffset { offset: u32, header_end: u32 },

    #[error("BI_BITFIELDS masks are not standard BGR(A) masks")]
    NonStandardBitfields,
}

/// Errors from header parsing and RGB565 conversion.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConvertError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("image is {width}x{height}; expected {expected_width}x{expected_height}")]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        width: u32,
        height: u32,
    },

    #[error("truncated BMP: need {needed} bytes, got {actual}")]
    TruncatedBuffer { needed: usize, actual: usize },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("output buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl ConvertError {
    /// The format subkind, if this is a [`ConvertError::Format`].
    pub fn format_kind(&self) -> Option<FormatError> {
        match self {
            ConvertError::Format(kind) => Some(*kind),
            _ => None,
        }
    }
}

impl From<StopReason> for ConvertError {
    fn from(r: StopReason) -> Self {
        ConvertError::Cancelled(r)
    }
}
