use alloc::string::String;

/// Errors from pixel format parsing (C1).
///
/// See spec §7 `FormatInvalid`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FormatError {
    #[error("bit string {0:?} must have exactly three dots (\"R.G.B.A\")")]
    MalformedBitString(String),

    #[error("channel bit width {bits} for channel {channel} exceeds 8")]
    ChannelBitsTooWide { channel: usize, bits: u32 },

    #[error("total bits {total} must be a positive multiple of 8 and at most 32")]
    InvalidTotalBits { total: u32 },

    #[error("channel order position {0} is used by more than one channel")]
    DuplicateChannel(u8),

    #[error("channel order position {0} is out of range [0, 3]")]
    ChannelOutOfRange(i32),
}

/// Errors from the bitwise pipeline operand parser (C5).
///
/// See spec §7 `PipelineBitsMalformed`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PipelineError {
    #[error("bitwise stage operand {0:?} is not of the form \"hh.hh.hh\"")]
    MalformedOperand(String),
}

/// Errors raised before a decode is attempted.
///
/// Spec §7's propagation policy: these short-circuit the decoder without
/// touching the output buffer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PixelDbgError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("dimensions {width}x{height} invalid: must be in [1, {max}]")]
    DimensionsInvalid { width: u32, height: u32, max: u32 },

    #[error("DXT mode requires format 5.6.5.0 or 5.5.5.1 (one_bit_alpha), got {0}")]
    DxtFormatMismatch(String),

    #[error("palette is not allowed in {0} mode")]
    PaletteNotAllowedInMode(&'static str),

    #[error("output buffer too small: need {needed} bytes, have {actual}")]
    BufferTooSmall { needed: usize, actual: usize },
}

/// I/O errors from the `std`-gated file windowing and output-writer layer.
///
/// See spec §7 `IOUnavailable` / `OffsetOutOfRange`.
#[cfg(feature = "std")]
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapIoError {
    #[error("file unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    #[error("requested offset {offset} is at or beyond file size {file_size}")]
    OffsetOutOfRange { offset: u64, file_size: u64 },

    #[error(transparent)]
    Decode(#[from] PixelDbgError),
}
