//! Resource model (spec §5).
//!
//! All buffers are caller-preallocated once; these constants are the fixed
//! upper bounds the core guarantees it will never exceed.

use crate::error::PixelDbgError;

/// Maximum width or height the core accepts (spec §7 `DimensionsInvalid`).
pub const MAX_DIM: u32 = 1024;

/// Maximum bytes of input window the core will read (`max_width * max_height * 4`).
pub const MAX_INPUT_BYTES: usize = (MAX_DIM as usize) * (MAX_DIM as usize) * 4;

/// Maximum bytes of output raster (`max_width * max_height * 3`).
pub const MAX_OUTPUT_BYTES: usize = (MAX_DIM as usize) * (MAX_DIM as usize) * 3;

/// Size of a decoded palette (256 entries * 3 bytes RGB24).
pub const PALETTE_BYTES: usize = 768;

/// Size of the raw palette source buffer (256 entries * 4 bytes max pixel size).
pub const RAW_PALETTE_BYTES: usize = 1024;

/// Validate requested image dimensions against spec §7 `DimensionsInvalid`.
pub fn check_dimensions(width: u32, height: u32) -> Result<(), PixelDbgError> {
    if width == 0 || height == 0 || width > MAX_DIM || height > MAX_DIM {
        return Err(PixelDbgError::DimensionsInvalid {
            width,
            height,
            max: MAX_DIM,
        });
    }
    Ok(())
}
