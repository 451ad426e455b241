//! File windowing (C7, spec §4.7; `std` feature).
//!
//! Reads a bounded slice of an on-disk file into a caller-owned buffer, and
//! computes the file offset a given on-screen pixel came from ("picking").

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use crate::dxt::Dxt;
use crate::error::BitmapIoError;

/// Read up to `buf.len()` bytes starting at `offset` from the file at
/// `path`, returning the number of bytes actually read (which may be less
/// than `buf.len()` near EOF).
///
/// Returns [`BitmapIoError::OffsetOutOfRange`] if `offset >= file_size`
/// rather than silently clamping — the policy decision of what to do next
/// (skip vs. clamp to 0) belongs to the caller (spec §7).
pub fn read_window(path: &Path, offset: u64, buf: &mut [u8]) -> Result<usize, BitmapIoError> {
    let mut file = File::open(path)?;
    let file_size = file.seek(SeekFrom::End(0))?;
    if offset >= file_size {
        #[cfg(feature = "debug-logging")]
        log::debug!("read_window: offset {offset} at or beyond file_size {file_size}, rejecting");
        return Err(BitmapIoError::OffsetOutOfRange { offset, file_size });
    }

    file.seek(SeekFrom::Start(offset))?;
    let available = file_size - offset;
    let want = (buf.len() as u64).min(available) as usize;

    let mut read = 0usize;
    while read < want {
        let n = file.read(&mut buf[read..want])?;
        if n == 0 {
            break;
        }
        read += n;
    }
    #[cfg(feature = "debug-logging")]
    log::trace!("read_window: offset={offset} want={want} got={read} file_size={file_size}");
    Ok(read)
}

/// The file offset that produced on-screen pixel `(x, y)` in raw mode
/// (spec §4.7).
pub fn pick_raw_offset(accum_offset: u64, width: u32, x: u32, y: u32, pixel_size_bytes: u8) -> u64 {
    let pixel_size = u64::from(pixel_size_bytes);
    accum_offset + u64::from(y) * u64::from(width) * pixel_size + u64::from(x) * pixel_size
}

/// The file offset of the DXT block containing on-screen pixel `(x, y)`
/// (spec §4.7). `height_in_blocks = height / 4`.
pub fn pick_dxt_offset(accum_offset: u64, height_in_blocks: u32, x: u32, y: u32, dxt: Dxt) -> u64 {
    let block_size: u64 = match dxt {
        Dxt::Dxt1 { .. } => 8,
        Dxt::Dxt3 | Dxt::Dxt5 => 16,
    };
    let block = u64::from(y / 4) * u64::from(height_in_blocks) + u64::from(x / 4);
    accum_offset + block * block_size
}
