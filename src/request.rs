//! Decode dispatch: wires C2–C5 together behind one entry point (spec §2,
//! §3's `DecodeRequest`).

use alloc::format;

use crate::dxt::{self, Dxt};
use crate::error::PixelDbgError;
use crate::format::PixelFormat;
use crate::palette::Palette;
use crate::pipeline::BitwiseStage;
use crate::raw::{self, ChannelMask, RawDecodeOptions, TileSpec};
use crate::rle::{self, RleVariant};

/// Which decoder a [`DecodeRequest`] routes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeMode {
    Raw,
    Dxt(Dxt),
    Rle(RleVariant),
}

/// A self-contained description of one decode, constructed per redraw and
/// consumed once (spec §3).
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    pub input: &'a [u8],
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub mode: DecodeMode,
    pub tile: TileSpec,
    pub channel_mask: ChannelMask,
    pub palette: Option<&'a Palette>,
    pub pipeline: &'a [BitwiseStage],
}

/// The caller-controllable option set from spec §6.4, independent of any
/// one decode (persisted across redraws, unlike [`DecodeRequest`]).
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    pub flip_vertical: bool,
    pub flip_horizontal: bool,
    pub count_colors: bool,
}

/// Decode `req` into `out` (tightly packed RGB24, row-major, top-down),
/// dispatching to C2, C3, or C4 and enforcing spec §3 invariant 4 (DXT
/// excludes RLE and palette mode).
pub fn decode(req: &DecodeRequest<'_>, out: &mut [u8]) -> Result<(), PixelDbgError> {
    match req.mode {
        DecodeMode::Raw => {
            let opts = RawDecodeOptions {
                tile: req.tile,
                channel_mask: req.channel_mask,
                ignore_channel_order: false,
                palette: req.palette,
                pipeline: req.pipeline,
            };
            raw::decode(req.input, req.width, req.height, &req.format, &opts, out)
        }
        DecodeMode::Dxt(variant) => {
            if req.palette.is_some() {
                return Err(PixelDbgError::PaletteNotAllowedInMode("DXT"));
            }
            validate_dxt_format(&req.format, variant)?;
            dxt::decode(
                req.input,
                req.width,
                req.height,
                &req.format,
                variant,
                req.channel_mask,
                out,
            )
        }
        DecodeMode::Rle(variant) => {
            if req.palette.is_some() {
                return Err(PixelDbgError::PaletteNotAllowedInMode("RLE"));
            }
            rle::decode(
                req.input,
                req.width,
                req.height,
                &req.format,
                variant,
                req.channel_mask,
                req.pipeline,
                out,
            )
        }
    }
}

fn validate_dxt_format(format: &PixelFormat, dxt: Dxt) -> Result<(), PixelDbgError> {
    let one_bit_alpha = matches!(dxt, Dxt::Dxt1 { one_bit_alpha: true });
    let expected = if one_bit_alpha { [5, 5, 5, 1] } else { [5, 6, 5, 0] };
    if format.bits_per_channel != expected {
        return Err(PixelDbgError::DxtFormatMismatch(format!(
            "{}.{}.{}.{}",
            format.bits_per_channel[0],
            format.bits_per_channel[1],
            format.bits_per_channel[2],
            format.bits_per_channel[3]
        )));
    }
    Ok(())
}
