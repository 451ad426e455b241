//! 24-bit BMP writer (spec §6.1).

use std::io::{self, Write};

/// Write `rgb24` (tightly packed, row-major, top-down) as a 24-bit BMP.
///
/// Flips to bottom-up and swaps to BGR on a scratch copy — the caller's
/// raster is never mutated.
pub fn write<W: Write>(writer: &mut W, width: u32, height: u32, rgb24: &[u8]) -> io::Result<()> {
    let w = width as usize;
    let h = height as usize;
    let size = w * h * 3;
    if rgb24.len() < size {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "rgb24 buffer smaller than width*height*3",
        ));
    }

    let mut header = [0u8; 54];
    header[0..2].copy_from_slice(&0x4D42u16.to_le_bytes());
    header[2..6].copy_from_slice(&(size as u32 + 54).to_le_bytes());
    header[10..14].copy_from_slice(&54u32.to_le_bytes());
    header[14..18].copy_from_slice(&40u32.to_le_bytes());
    header[18..22].copy_from_slice(&width.to_le_bytes());
    header[22..26].copy_from_slice(&height.to_le_bytes());
    header[26..28].copy_from_slice(&1u16.to_le_bytes());
    header[28..30].copy_from_slice(&24u16.to_le_bytes());
    header[34..38].copy_from_slice(&(size as u32).to_le_bytes());
    writer.write_all(&header)?;

    let stride = w * 3;
    for row in (0..h).rev() {
        let src = &rgb24[row * stride..row * stride + stride];
        for px in src.chunks(3) {
            writer.write_all(&[px[2], px[1], px[0]])?;
        }
    }

    Ok(())
}
