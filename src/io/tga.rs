//! 18-byte-header TGA writer (spec §6.2).

use std::io::{self, Write};

/// Write `rgb24` (tightly packed, row-major, top-down) as a 24-bit TGA.
///
/// The `descriptor = 32` flag marks the image top-to-bottom, so (unlike
/// BMP) no row flip is needed — only the BGR swap, done on a scratch copy.
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
    if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "TGA width/height must fit in u16",
        ));
    }

    let mut header = [0u8; 18];
    header[2] = 2; // imagetype: uncompressed truecolor
    header[12..14].copy_from_slice(&(width as u16).to_le_bytes());
    header[14..16].copy_from_slice(&(height as u16).to_le_bytes());
    header[16] = 24; // bpp
    header[17] = 32; // descriptor: top-to-bottom
    writer.write_all(&header)?;

    for px in rgb24[..size].chunks(3) {
        writer.write_all(&[px[2], px[1], px[0]])?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_and_bgr_payload_without_flip() {
        let rgb24 = [0xFF, 0x00, 0x00, 0x00, 0xFF, 0x00];
        let mut out = Vec::new();
        write(&mut out, 2, 1, &rgb24).unwrap();

        assert_eq!(out.len(), 18 + 6);
        assert_eq!(out[2], 2);
        assert_eq!(u16::from_le_bytes(out[12..14].try_into().unwrap()), 2);
        assert_eq!(u16::from_le_bytes(out[14..16].try_into().unwrap()), 1);
        assert_eq!(out[16], 24);
        assert_eq!(out[17], 32);

        // row order preserved (no flip), BGR swap applied
        assert_eq!(&out[18..21], &[0x00, 0x00, 0xFF]);
        assert_eq!(&out[21..24], &[0x00, 0xFF, 0x00]);
    }
}
