//! Per-pixel bitwise post-processing pipeline (C5, spec §4.5).

use alloc::string::ToString;

use crate::error::PipelineError;

/// One of the eight bitwise operations a pipeline stage can perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitwiseOp {
    Nop,
    And,
    Or,
    Xor,
    Shl,
    Shr,
    Rol,
    Ror,
}

/// One stage of the bitwise pipeline: an operation plus a per-channel
/// operand byte. `Nop` stages are skipped during `apply`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitwiseStage {
    pub op: BitwiseOp,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl BitwiseStage {
    pub const NOP: BitwiseStage = BitwiseStage {
        op: BitwiseOp::Nop,
        r: 0,
        g: 0,
        b: 0,
    };

    /// Parse a `"hh.hh.hh"` hex-triplet operand string (as entered for one
    /// pipeline stage), producing the `(r, g, b)` operand bytes.
    ///
    /// Case-insensitive. Rejects anything that is not exactly three
    /// dot-separated hex groups — ported from `getRGBABitsFromHexString` in
    /// the original source, including its quirk of rejecting any character
    /// that folds (via ASCII `tolower`) above `'f'` (0x66) rather than
    /// strictly validating hex digits. A group with more than two hex
    /// digits is accepted and truncated to its low byte, matching the
    /// original's `sscanf("%x", ...)` followed by `& 0xff` rather than
    /// rejecting on overflow.
    pub fn parse_operand(text: &str) -> Result<(u8, u8, u8), PipelineError> {
        let malformed = || PipelineError::MalformedOperand(text.to_string());

        let mut dots = 0usize;
        for c in text.chars() {
            if c == '.' {
                dots += 1;
            } else if !c.is_ascii_alphanumeric() {
                return Err(malformed());
            } else if c.to_ascii_lowercase() as u32 > 0x66 {
                return Err(malformed());
            }
        }
        if dots != 2 {
            return Err(malformed());
        }

        let mut parts = text.splitn(3, '.');
        let (r, g, b) = match (parts.next(), parts.next(), parts.next()) {
            (Some(r), Some(g), Some(b)) => (r, g, b),
            _ => return Err(malformed()),
        };

        let parse_hex = |s: &str| {
            u32::from_str_radix(s, 16)
                .map(|v| v as u8)
                .map_err(|_| malformed())
        };
        Ok((parse_hex(r)?, parse_hex(g)?, parse_hex(b)?))
    }
}

/// Apply up to five ordered pipeline stages to one RGB triplet in place.
///
/// The pipeline never touches alpha — the raster has no alpha plane.
pub fn apply(stages: &[BitwiseStage], r: &mut u8, g: &mut u8, b: &mut u8) {
    for stage in stages {
        match stage.op {
            BitwiseOp::Nop => {}
            BitwiseOp::And => {
                *r &= stage.r;
                *g &= stage.g;
                *b &= stage.b;
            }
            BitwiseOp::Or => {
                *r |= stage.r;
                *g |= stage.g;
                *b |= stage.b;
            }
            BitwiseOp::Xor => {
                *r ^= stage.r;
                *g ^= stage.g;
                *b ^= stage.b;
            }
            BitwiseOp::Shl => {
                *r = shl(*r, stage.r);
                *g = shl(*g, stage.g);
                *b = shl(*b, stage.b);
            }
            BitwiseOp::Shr => {
                *r = shr(*r, stage.r);
                *g = shr(*g, stage.g);
                *b = shr(*b, stage.b);
            }
            BitwiseOp::Rol => {
                *r = rol(*r, stage.r);
                *g = rol(*g, stage.g);
                *b = rol(*b, stage.b);
            }
            BitwiseOp::Ror => {
                *r = ror(*r, stage.r);
                *g = ror(*g, stage.g);
                *b = ror(*b, stage.b);
            }
        }
    }
}

fn shl(v: u8, amount: u8) -> u8 {
    if amount >= 8 { 0 } else { v << amount }
}

fn shr(v: u8, amount: u8) -> u8 {
    if amount >= 8 { 0 } else { v >> amount }
}

fn rol(v: u8, amount: u8) -> u8 {
    let amount = amount.min(8);
    if amount == 0 || amount == 8 {
        v
    } else {
        (v << amount) | (v >> (8 - amount))
    }
}

fn ror(v: u8, amount: u8) -> u8 {
    let amount = amount.min(8);
    if amount == 0 || amount == 8 {
        v
    } else {
        (v >> amount) | (v << (8 - amount))
    }
}
