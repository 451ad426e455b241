use pixeldbg::*;

fn raw_request<'a>(
    input: &'a [u8],
    width: u32,
    height: u32,
    format: PixelFormat,
) -> DecodeRequest<'a> {
    DecodeRequest {
        input,
        width,
        height,
        format,
        mode: DecodeMode::Raw,
        tile: TileSpec::DISABLED,
        channel_mask: ChannelMask::default(),
        palette: None,
        pipeline: &[],
    }
}

#[test]
fn s1_identity_8_8_8_0() {
    let input = [0xFFu8, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0xFF];
    let format = PixelFormat::parse("8.8.8.0", [1, 2, 3, 4]).unwrap();
    let req = raw_request(&input, 3, 1, format);
    let mut out = [0u8; 9];
    decode(&req, &mut out).unwrap();
    assert_eq!(out, [0xFF, 0, 0, 0, 0xFF, 0, 0, 0, 0xFF]);
}

#[test]
fn s2_565_reordered() {
    let input = [0x1Fu8, 0x00];
    let format = PixelFormat::parse("5.6.5.0", [3, 2, 1, 4]).unwrap(); // B=1,G=2,R=3,A=4
    let req = raw_request(&input, 1, 1, format);
    let mut out = [0u8; 3];
    decode(&req, &mut out).unwrap();
    assert_eq!(out, [0xF8, 0x00, 0x00]);
}

#[test]
fn s3_dxt1_solid_red_block() {
    let colors: u32 = 0xFFFF; // rgb0 = rgb1 = 0xFFFF
    let colors = colors | (0xFFFFu32 << 16);
    let clrlut: u32 = 0;
    let mut input = [0u8; 8];
    input[0..4].copy_from_slice(&colors.to_le_bytes());
    input[4..8].copy_from_slice(&clrlut.to_le_bytes());

    let format = PixelFormat::dxt_565([1, 2, 3, 4]).unwrap();
    let req = DecodeRequest {
        input: &input,
        width: 4,
        height: 4,
        format,
        mode: DecodeMode::Dxt(Dxt::Dxt1 { one_bit_alpha: false }),
        tile: TileSpec::DISABLED,
        channel_mask: ChannelMask::default(),
        palette: None,
        pipeline: &[],
    };
    let mut out = [0u8; 4 * 4 * 3];
    decode(&req, &mut out).unwrap();
    for px in out.chunks(3) {
        assert_eq!(px, [0xFF, 0xFF, 0xFF]);
    }
}

#[test]
fn s3_dxt1_pure_red_565_block() {
    // Scenario table's literal DXT1 block is all-white (0xFFFF); this
    // variant exercises a genuine 5.6.5.0 red endpoint to pin down the
    // B,G,R output order the scenario table specifies (`00 00 F8`).
    let rgb: u16 = 0xF800; // pure red in 565
    let colors: u32 = u32::from(rgb) | (u32::from(rgb) << 16);
    let clrlut: u32 = 0;
    let mut input = [0u8; 8];
    input[0..4].copy_from_slice(&colors.to_le_bytes());
    input[4..8].copy_from_slice(&clrlut.to_le_bytes());

    let format = PixelFormat::dxt_565([1, 2, 3, 4]).unwrap();
    let req = DecodeRequest {
        input: &input,
        width: 4,
        height: 4,
        format,
        mode: DecodeMode::Dxt(Dxt::Dxt1 { one_bit_alpha: false }),
        tile: TileSpec::DISABLED,
        channel_mask: ChannelMask::default(),
        palette: None,
        pipeline: &[],
    };
    let mut out = [0u8; 4 * 4 * 3];
    decode(&req, &mut out).unwrap();
    for px in out.chunks(3) {
        assert_eq!(px, [0x00, 0x00, 0xF8]);
    }
}

#[test]
fn s4_rle_lsb_run_of_four() {
    let input = [0x03u8, 0xFF, 0x00, 0x00];
    let format = PixelFormat::parse("8.8.8.0", [1, 2, 3, 4]).unwrap();
    let req = DecodeRequest {
        input: &input,
        width: 4,
        height: 1,
        format,
        mode: DecodeMode::Rle(RleVariant::Lsb),
        tile: TileSpec::DISABLED,
        channel_mask: ChannelMask::default(),
        palette: None,
        pipeline: &[],
    };
    let mut out = [0u8; 4 * 3];
    decode(&req, &mut out).unwrap();
    for px in out.chunks(3) {
        assert_eq!(px, [0xFF, 0x00, 0x00]);
    }
}

#[test]
fn s5_palette_mode() {
    let mut raw_palette = [0u8; RAW_PALETTE_BYTES];
    raw_palette[3] = 0x00;
    raw_palette[4] = 0xFF;
    raw_palette[5] = 0x00;
    let palette_format = PixelFormat::parse("8.8.8.0", [1, 2, 3, 4]).unwrap();
    let palette = Palette::decode(&raw_palette, &palette_format).unwrap();

    let format = PixelFormat::parse("0.0.0.8", [1, 2, 3, 4]).unwrap();
    let input = [0x01u8, 0x01];
    let req = DecodeRequest {
        input: &input,
        width: 2,
        height: 1,
        format,
        mode: DecodeMode::Raw,
        tile: TileSpec::DISABLED,
        channel_mask: ChannelMask::default(),
        palette: Some(&palette),
        pipeline: &[],
    };
    let mut out = [0u8; 2 * 3];
    decode(&req, &mut out).unwrap();
    assert_eq!(out, [0x00, 0xFF, 0x00, 0x00, 0xFF, 0x00]);
}

#[test]
fn s6_double_xor_pipeline_is_identity() {
    let stage = BitwiseStage {
        op: BitwiseOp::Xor,
        r: 0xFF,
        g: 0xFF,
        b: 0xFF,
    };
    let input = [0x12u8, 0x34, 0x56];
    let format = PixelFormat::parse("8.8.8.0", [1, 2, 3, 4]).unwrap();
    let req = DecodeRequest {
        input: &input,
        width: 1,
        height: 1,
        format,
        mode: DecodeMode::Raw,
        tile: TileSpec::DISABLED,
        channel_mask: ChannelMask::default(),
        palette: None,
        pipeline: &[stage, stage],
    };
    let mut out = [0u8; 3];
    decode(&req, &mut out).unwrap();
    assert_eq!(out, input);
}

#[test]
fn universal_property_untouched_pixels_stay_zero() {
    let input = [0xFFu8, 0x00, 0x00]; // only 1 pixel worth of data
    let format = PixelFormat::parse("8.8.8.0", [1, 2, 3, 4]).unwrap();
    let req = raw_request(&input, 2, 1, format);
    let mut out = [0x99u8; 6];
    // zero the buffer first, per spec invariant 2 (raster bytes not
    // written by the decoder must already be zero).
    out.fill(0);
    decode(&req, &mut out).unwrap();
    assert_eq!(&out[0..3], &[0xFF, 0, 0]);
    assert_eq!(&out[3..6], &[0, 0, 0]);
}

#[test]
fn universal_property_flip_vertical_then_horizontal_round_trips() {
    let mut raster = vec![
        1, 1, 1, 2, 2, 2, // row 0
        3, 3, 3, 4, 4, 4, // row 1
    ];
    let original = raster.clone();
    flip_vertical(2, 2, &mut raster);
    flip_horizontal(2, 2, &mut raster);
    flip_horizontal(2, 2, &mut raster);
    flip_vertical(2, 2, &mut raster);
    assert_eq!(raster, original);
}

#[test]
fn universal_property_color_count() {
    let raster = [
        0xFF, 0x00, 0x00, // red
        0x00, 0xFF, 0x00, // green
        0xFF, 0x00, 0x00, // red again
    ];
    assert_eq!(count_colors(3, 1, &raster), 2);
}
