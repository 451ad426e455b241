//! Run-length decoder (C4, spec §4.4).

use crate::error::PixelDbgError;
use crate::format::PixelFormat;
use crate::limits::check_dimensions;
use crate::pipeline::{self, BitwiseStage};
use crate::raw::{self, ChannelMask, RawDecodeOptions, TileSpec};

/// Which byte of a packet holds the run length, and how it is masked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RleVariant {
    /// Run length in the packet's first byte, full 8-bit mask.
    Lsb,
    /// Run length in the packet's last byte (after the pixel), full 8-bit mask.
    Msb,
    /// Run length in the packet's first byte, high bit cleared (7-bit mask).
    Tga7Bit,
}

impl RleVariant {
    fn mask(self) -> u8 {
        match self {
            RleVariant::Tga7Bit => 0x7f,
            _ => 0xff,
        }
    }

    fn length_byte_is_last(self) -> bool {
        matches!(self, RleVariant::Msb)
    }
}

/// Decode an RLE byte stream into `out` (tightly packed RGB24, row-major,
/// top-down) under `format`, per spec §4.4.
///
/// Each packet is `pixel_size + 1` bytes: a length byte plus one pixel,
/// decoded once via the raw decoder (C2) and replicated `length` times.
/// Stops once `width*height` pixels have been written or `input` is
/// exhausted.
pub fn decode(
    input: &[u8],
    width: u32,
    height: u32,
    format: &PixelFormat,
    variant: RleVariant,
    channel_mask: ChannelMask,
    pipeline_stages: &[BitwiseStage],
    out: &mut [u8],
) -> Result<(), PixelDbgError> {
    check_dimensions(width, height)?;
    let total_pixels = width as usize * height as usize;
    let needed = total_pixels * 3;
    if out.len() < needed {
        return Err(PixelDbgError::BufferTooSmall {
            needed,
            actual: out.len(),
        });
    }

    let pixel_size = format.pixel_size_bytes as usize;
    if pixel_size == 0 {
        return Ok(());
    }
    let packet_size = pixel_size + 1;
    let mask = variant.mask();
    let length_byte_is_last = variant.length_byte_is_last();

    let opts = RawDecodeOptions {
        tile: TileSpec::DISABLED,
        channel_mask,
        ignore_channel_order: false,
        palette: None,
        pipeline: &[],
    };

    let mut num_pixels = 0usize;
    let mut i = 0usize;
    while i + packet_size <= input.len() {
        let packet = &input[i..i + packet_size];
        let length_byte = if length_byte_is_last {
            packet[pixel_size]
        } else {
            packet[0]
        };
        let mut length = usize::from(length_byte & mask) + 1;
        if num_pixels + length > total_pixels {
            length = total_pixels - num_pixels;
        }

        let pixel_bytes = if length_byte_is_last {
            &packet[0..pixel_size]
        } else {
            &packet[1..]
        };

        let mut scratch = [0u8; 3];
        raw::decode(pixel_bytes, 1, 1, format, &opts, &mut scratch)?;
        let (mut r, mut g, mut b) = (scratch[0], scratch[1], scratch[2]);
        pipeline::apply(pipeline_stages, &mut r, &mut g, &mut b);

        for _ in 0..length {
            let dest = num_pixels * 3;
            out[dest] = r;
            out[dest + 1] = g;
            out[dest + 2] = b;
            num_pixels += 1;
        }

        if num_pixels >= total_pixels {
            break;
        }
        i += packet_size;
    }

    #[cfg(feature = "debug-logging")]
    if num_pixels < total_pixels {
        log::debug!(
            "rle::decode: truncated input, num_pixels={num_pixels} total_pixels={total_pixels}"
        );
    }

    Ok(())
}
