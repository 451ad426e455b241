//! Raw pixel decoder (C2, spec §4.2): arbitrary-bit-width channel
//! extraction with optional tiling and palette indirection.

use crate::error::PixelDbgError;
use crate::format::PixelFormat;
use crate::limits::check_dimensions;
use crate::palette::Palette;
use crate::pipeline::{self, BitwiseStage};

/// Rectangular tiling layout (spec §3 `TileSpec`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileSpec {
    pub enabled: bool,
    pub tile_w: u32,
    pub tile_h: u32,
}

impl TileSpec {
    pub const DISABLED: TileSpec = TileSpec {
        enabled: false,
        tile_w: 0,
        tile_h: 0,
    };
}

/// Per-channel enable flags (spec §3 `ChannelMask`). `true` means the
/// channel is decoded; `false` means it is forced to zero in the output
/// (and, for R/G/B all `false` with `a: true`, triggers alpha-only mode).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelMask {
    pub r: bool,
    pub g: bool,
    pub b: bool,
    pub a: bool,
}

impl Default for ChannelMask {
    fn default() -> Self {
        ChannelMask {
            r: true,
            g: true,
            b: true,
            a: true,
        }
    }
}

/// Options controlling one raw-decoder invocation.
#[derive(Clone, Copy, Debug)]
pub struct RawDecodeOptions<'a> {
    pub tile: TileSpec,
    pub channel_mask: ChannelMask,
    /// Used only when decoding the palette itself (spec §4.2 step 1).
    pub ignore_channel_order: bool,
    pub palette: Option<&'a Palette>,
    pub pipeline: &'a [BitwiseStage],
}

impl<'a> RawDecodeOptions<'a> {
    pub fn new() -> Self {
        RawDecodeOptions {
            tile: TileSpec::DISABLED,
            channel_mask: ChannelMask::default(),
            ignore_channel_order: false,
            palette: None,
            pipeline: &[],
        }
    }
}

impl<'a> Default for RawDecodeOptions<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode `input` into `out` (tightly packed RGB24, row-major, top-down)
/// under `format`, per spec §4.2's seven-step algorithm.
///
/// Writes at most `width*height` pixels; bytes beyond the decoded region
/// (out-of-data tail, un-evenly-tiled remainder) are left untouched, so
/// callers must zero `out` first if they need invariant 2 from spec §3.
pub fn decode(
    input: &[u8],
    width: u32,
    height: u32,
    format: &PixelFormat,
    opts: &RawDecodeOptions<'_>,
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

    // Step 1: IgnoreChannelOrder remap — used only for palette decoding.
    let effective_order;
    let effective_bits = format.bits_per_channel;
    if opts.ignore_channel_order {
        effective_order = [0u8, 1, 2, 3];
    } else {
        effective_order = format.channel_order;
    }
    let effective = PixelFormat {
        bits_per_channel: effective_bits,
        channel_order: effective_order,
        pixel_size_bytes: format.pixel_size_bytes,
        masks: {
            let mut m = [0u32; 4];
            for c in 0..4 {
                m[effective_order[c] as usize] = (1u32 << effective_bits[c]) - 1;
            }
            m
        },
    };

    // Step 2: palette mode forces pixel_size_bytes = 1.
    let pixel_size = if opts.palette.is_some() {
        1usize
    } else {
        effective.pixel_size_bytes as usize
    };
    if pixel_size == 0 {
        return Ok(());
    }

    // Step 3: per-position bit counts and promotion shifts.
    let bit_count = effective.bit_count_by_position();
    let mut diff = [0u32; 4];
    for c in 0..4 {
        diff[c] = effective.diff(c);
    }

    // Step 4: truncate input length down to a multiple of pixel_size.
    let mut input_len = input.len();
    input_len -= input_len % pixel_size;

    // Step 5: alpha-only mode.
    let alpha_only =
        !opts.channel_mask.r && !opts.channel_mask.g && !opts.channel_mask.b && opts.channel_mask.a;
    if alpha_only {
        diff[crate::format::CHANNEL_R] = diff[crate::format::CHANNEL_A];
        diff[crate::format::CHANNEL_G] = diff[crate::format::CHANNEL_A];
        diff[crate::format::CHANNEL_B] = diff[crate::format::CHANNEL_A];
    }

    // Step 6: tile grid.
    let width = width as usize;
    let height = height as usize;
    let (tile_w, tile_h, x_tiles, y_tiles) =
        if !opts.tile.enabled || opts.tile.tile_w as usize >= width || opts.tile.tile_h as usize >= height {
            (width, height, 1, 1)
        } else {
            let tw = opts.tile.tile_w as usize;
            let th = opts.tile.tile_h as usize;
            (tw, th, width / tw, height / th)
        };

    let total_pixels = input_len / pixel_size;
    let stride = width * pixel_size;
    let mut num_pixels = 0usize;
    let mut dest = 0usize;

    'tiles: for ty in 0..y_tiles {
        let by = ty * tile_h;
        for tx in 0..x_tiles {
            let bx = tx * tile_w;
            for y in 0..tile_h {
                for x in 0..tile_w {
                    if num_pixels >= total_pixels {
                        #[cfg(feature = "debug-logging")]
                        log::trace!(
                            "raw::decode: stopping at tile remainder, num_pixels={num_pixels} total_pixels={total_pixels}"
                        );
                        break 'tiles;
                    }

                    let i = (by + y) * stride + (bx + x) * pixel_size;

                    let mut pixel: u32 = 0;
                    for j in 0..pixel_size {
                        pixel |= u32::from(input[i + j]) << (j * 8);
                    }

                    let (mut r, mut g, mut b) = (0u8, 0u8, 0u8);

                    if let Some(palette) = opts.palette {
                        let entry = palette.entry(pixel as u8);
                        r = if opts.channel_mask.r {
                            entry[effective.channel_order[crate::format::CHANNEL_R] as usize]
                        } else {
                            0
                        };
                        g = if opts.channel_mask.g {
                            entry[effective.channel_order[crate::format::CHANNEL_G] as usize]
                        } else {
                            0
                        };
                        b = if opts.channel_mask.b {
                            entry[effective.channel_order[crate::format::CHANNEL_B] as usize]
                        } else {
                            0
                        };
                    } else if alpha_only {
                        if effective.bits_per_channel[crate::format::CHANNEL_A] != 0 {
                            let start = effective.start_bit(&bit_count, crate::format::CHANNEL_A);
                            let v =
                                ((pixel >> start) & effective.masks[effective.channel_order[crate::format::CHANNEL_A] as usize]) as u8;
                            r = v;
                            g = v;
                            b = v;
                        }
                    } else {
                        if opts.channel_mask.r && effective.bits_per_channel[crate::format::CHANNEL_R] != 0 {
                            let start = effective.start_bit(&bit_count, crate::format::CHANNEL_R);
                            r = ((pixel >> start) & effective.masks[effective.channel_order[crate::format::CHANNEL_R] as usize]) as u8;
                        }
                        if opts.channel_mask.g && effective.bits_per_channel[crate::format::CHANNEL_G] != 0 {
                            let start = effective.start_bit(&bit_count, crate::format::CHANNEL_G);
                            g = ((pixel >> start) & effective.masks[effective.channel_order[crate::format::CHANNEL_G] as usize]) as u8;
                        }
                        if opts.channel_mask.b && effective.bits_per_channel[crate::format::CHANNEL_B] != 0 {
                            let start = effective.start_bit(&bit_count, crate::format::CHANNEL_B);
                            b = ((pixel >> start) & effective.masks[effective.channel_order[crate::format::CHANNEL_B] as usize]) as u8;
                        }
                    }

                    if opts.palette.is_none() {
                        r <<= diff[crate::format::CHANNEL_R];
                        g <<= diff[crate::format::CHANNEL_G];
                        b <<= diff[crate::format::CHANNEL_B];
                    }

                    pipeline::apply(opts.pipeline, &mut r, &mut g, &mut b);

                    out[dest] = r;
                    out[dest + 1] = g;
                    out[dest + 2] = b;

                    dest += 3;
                    num_pixels += 1;
                }
            }
        }
    }

    Ok(())
}
