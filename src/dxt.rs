//! S3TC (DXT1/DXT3/DXT5) block decoder (C3, spec §4.3).

use crate::error::PixelDbgError;
use crate::format::{PixelFormat, CHANNEL_A, CHANNEL_B, CHANNEL_G, CHANNEL_R};
use crate::limits::check_dimensions;
use crate::raw::ChannelMask;

/// Which S3TC block layout to decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dxt {
    /// `one_bit_alpha` selects the 5.5.5.1 endpoint decode (vs. 5.6.5.0).
    Dxt1 { one_bit_alpha: bool },
    Dxt3,
    Dxt5,
}

impl Dxt {
    /// Total bytes consumed per 4x4 block, including the ignored alpha
    /// block for DXT3/DXT5.
    fn block_bytes(self) -> usize {
        match self {
            Dxt::Dxt1 { .. } => 8,
            Dxt::Dxt3 | Dxt::Dxt5 => 16,
        }
    }
}

/// One decoded endpoint color, in fixed R/G/B/A slots (independent of the
/// output channel order, which only governs where these land in `out`).
type Entry = [u8; 4];

fn decode_endpoint(rgb: u16, one_bit_alpha: bool) -> Entry {
    let r = ((rgb >> 11) << 3) as u8;
    let g = if one_bit_alpha {
        (((rgb >> 6) << 3) & 0xff) as u8
    } else {
        (((rgb >> 5) << 2) & 0xff) as u8
    };
    let b = if one_bit_alpha {
        (((rgb >> 1) << 3) & 0xff) as u8
    } else {
        ((rgb << 3) & 0xff) as u8
    };
    let a = if one_bit_alpha {
        if rgb & 1 != 0 { 255 } else { 0 }
    } else {
        0
    };
    [r, g, b, a]
}

fn lerp_third(e0: u8, e1: u8) -> u8 {
    ((2 * u32::from(e0) + u32::from(e1)) / 3) as u8
}

fn lerp_two_thirds(e0: u8, e1: u8) -> u8 {
    ((u32::from(e0) + 2 * u32::from(e1)) / 3) as u8
}

fn half(e0: u8, e1: u8) -> u8 {
    ((u32::from(e0) + u32::from(e1)) / 2) as u8
}

/// Decode a DXT1/3/5 byte stream into `out` (tightly packed RGB24,
/// row-major, top-down), per spec §4.3.
///
/// Stops (without error) the moment a full block can no longer be read from
/// `input`; bytes of `out` beyond that point are left untouched.
pub fn decode(
    input: &[u8],
    width: u32,
    height: u32,
    format: &PixelFormat,
    dxt: Dxt,
    channel_mask: ChannelMask,
    out: &mut [u8],
) -> Result<(), PixelDbgError> {
    check_dimensions(width, height)?;
    let needed = width as usize * height as usize * 3;
    if out.len() < needed {
        return Err(PixelDbgError::BufferTooSmall {
            needed,
            actual: out.len(),
        });
    }

    let alpha_only = !channel_mask.r && !channel_mask.g && !channel_mask.b && channel_mask.a;
    let one_bit_alpha = matches!(dxt, Dxt::Dxt1 { one_bit_alpha: true });
    let is_dxt1 = matches!(dxt, Dxt::Dxt1 { .. });
    let block_bytes = dxt.block_bytes();

    let width = width as usize;
    let height = height as usize;
    let stride = width * 3;
    let x_tiles = width / 4;
    let y_tiles = height / 4;

    let r_slot = format.channel_order[CHANNEL_R] as usize;
    let g_slot = format.channel_order[CHANNEL_G] as usize;
    let b_slot = format.channel_order[CHANNEL_B] as usize;
    let a_slot = format.channel_order[CHANNEL_A] as usize;

    let mut cursor = 0usize;

    'blocks: for ty in 0..y_tiles {
        let by = ty * 4;
        for tx in 0..x_tiles {
            let bx = tx * 4;

            if cursor + block_bytes > input.len() {
                #[cfg(feature = "debug-logging")]
                log::debug!(
                    "dxt::decode: halting at truncated block, cursor={cursor} input_len={}",
                    input.len()
                );
                break 'blocks;
            }
            let color_offset = cursor + (block_bytes - 8);
            cursor += block_bytes;

            let colors = u32::from_le_bytes([
                input[color_offset],
                input[color_offset + 1],
                input[color_offset + 2],
                input[color_offset + 3],
            ]);
            let clrlut = u32::from_le_bytes([
                input[color_offset + 4],
                input[color_offset + 5],
                input[color_offset + 6],
                input[color_offset + 7],
            ]);

            let rgb0 = (colors & 0xffff) as u16;
            let rgb1 = (colors >> 16) as u16;
            let entry0 = decode_endpoint(rgb0, one_bit_alpha);
            let entry1 = decode_endpoint(rgb1, one_bit_alpha);

            let sharp_edge = is_dxt1 && rgb0 < rgb1;
            let entry2 = if sharp_edge {
                [
                    half(entry0[0], entry1[0]),
                    half(entry0[1], entry1[1]),
                    half(entry0[2], entry1[2]),
                    half(entry0[3], entry1[3]),
                ]
            } else {
                [
                    lerp_third(entry0[0], entry1[0]),
                    lerp_third(entry0[1], entry1[1]),
                    lerp_third(entry0[2], entry1[2]),
                    lerp_third(entry0[3], entry1[3]),
                ]
            };
            let entry3 = if sharp_edge {
                [0, 0, 0, 0]
            } else {
                [
                    lerp_two_thirds(entry0[0], entry1[0]),
                    lerp_two_thirds(entry0[1], entry1[1]),
                    lerp_two_thirds(entry0[2], entry1[2]),
                    lerp_two_thirds(entry0[3], entry1[3]),
                ]
            };
            let entries = [entry0, entry1, entry2, entry3];

            for y in 0..4 {
                for x in 0..4 {
                    let texel = y * 4 + x;
                    let code = ((clrlut >> (texel * 2)) & 3) as usize;
                    let entry = entries[code];
                    let dest = (by + y) * stride + (bx + x) * 3;

                    if alpha_only && one_bit_alpha {
                        let v = entry[a_slot];
                        out[dest] = v;
                        out[dest + 1] = v;
                        out[dest + 2] = v;
                    } else {
                        out[dest] = entry[b_slot];
                        out[dest + 1] = entry[g_slot];
                        out[dest + 2] = entry[r_slot];
                    }
                }
            }
        }
    }

    Ok(())
}
