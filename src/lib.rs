//! # pixeldbg
//!
//! Pixel decoding core for PixelDbg: reconstructs a 24-bit RGB raster from
//! an arbitrary byte window under a chosen pixel format, tiling layout,
//! compression scheme (raw, DXT1/3/5, or one of three run-length variants),
//! optional palette indirection, and a short bitwise post-processing
//! pipeline.
//!
//! ## Pipeline
//!
//! file bytes → (if DXT) [`dxt`] / (if RLE) [`rle`] / else [`raw`]
//! (using [`palette`] when palette mode is active) → [`pipeline`] →
//! [`ops`] → RGB24 raster. [`request`] wires these together behind one
//! `decode()` entry point. Every stage writes tightly packed RGB24 (three
//! bytes per pixel, row-major, top-down) into a caller-owned buffer —
//! nothing here allocates on the decode path.
//!
//! ## Features
//!
//! - `std` (default): file windowing ([`window`]), BMP/TGA output writers
//!   and palette file ingest ([`io`]). Disable it for a `no_std + alloc`
//!   build of the decode core alone.
//! - `debug-logging`: diagnostic `log` calls at tile-remainder skips, RLE
//!   truncation, DXT halt points, and window offset clamping.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod dxt;
mod error;
mod format;
mod limits;
mod ops;
mod palette;
mod pipeline;
mod raw;
mod request;
mod rle;

#[cfg(feature = "std")]
mod io;
#[cfg(feature = "std")]
mod window;

pub use dxt::Dxt;
pub use error::{FormatError, PipelineError, PixelDbgError};
pub use format::{PixelFormat, CHANNEL_A, CHANNEL_B, CHANNEL_G, CHANNEL_R};
pub use limits::{check_dimensions, MAX_DIM, MAX_INPUT_BYTES, MAX_OUTPUT_BYTES, PALETTE_BYTES, RAW_PALETTE_BYTES};
pub use ops::{count_colors, flip_horizontal, flip_vertical};
pub use palette::Palette;
pub use pipeline::{apply as apply_pipeline, BitwiseOp, BitwiseStage};
pub use raw::{ChannelMask, RawDecodeOptions, TileSpec};
pub use request::{decode, Config, DecodeMode, DecodeRequest};
pub use rle::RleVariant;

#[cfg(feature = "std")]
pub use error::BitmapIoError;
#[cfg(feature = "std")]
pub use io::{bmp, load_palette_file, palette_ingest_skip, tga};
#[cfg(feature = "std")]
pub use window::{pick_dxt_offset, pick_raw_offset, read_window};
