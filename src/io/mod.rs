//! Output file formats and palette ingest (§6.1, §6.2, §6.3; `std` feature).

pub mod bmp;
pub mod tga;

use std::fs;
use std::path::Path;

use crate::error::BitmapIoError;
use crate::format::PixelFormat;
use crate::limits::RAW_PALETTE_BYTES;
use crate::palette::Palette;

/// The header-skip offset for ingesting a palette file, based on its
/// extension (spec §6.3): `.bmp` skips 54 bytes, `.tga` skips 12, anything
/// else skips 0.
pub fn palette_ingest_skip(path: &Path) -> u64 {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("bmp") => 54,
        Some(ext) if ext.eq_ignore_ascii_case("tga") => 12,
        _ => 0,
    }
}

/// Load a palette from a file, skipping its format-specific header (§6.3)
/// and decoding up to [`RAW_PALETTE_BYTES`] of raw bytes via C2 with
/// `IgnoreChannelOrder | IgnoreTiles`.
pub fn load_palette_file(path: &Path, format: &PixelFormat) -> Result<Palette, BitmapIoError> {
    let skip = palette_ingest_skip(path) as usize;
    let bytes = fs::read(path)?;
    let body = bytes.get(skip..).unwrap_or(&[]);

    let mut raw = [0u8; RAW_PALETTE_BYTES];
    let take = body.len().min(RAW_PALETTE_BYTES);
    raw[..take].copy_from_slice(&body[..take]);

    Ok(Palette::decode(&raw, format)?)
}
