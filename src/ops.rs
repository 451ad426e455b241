//! Raster-level post-processing: flips and color counting (C6, spec §4.6).

use alloc::collections::BTreeSet;

/// Flip an RGB24 raster top-to-bottom in place.
pub fn flip_vertical(width: u32, height: u32, raster: &mut [u8]) {
    let width = width as usize;
    let height = height as usize;
    let stride = width * 3;

    for y in 0..height / 2 {
        let (top, bottom) = raster.split_at_mut((height - y - 1) * stride);
        let src = &mut top[y * stride..y * stride + stride];
        let dest = &mut bottom[0..stride];
        src.swap_with_slice(dest);
    }
}

/// Flip an RGB24 raster left-to-right in place.
pub fn flip_horizontal(width: u32, height: u32, raster: &mut [u8]) {
    let width = width as usize;
    let height = height as usize;
    let stride = width * 3;

    for y in 0..height {
        let line = &mut raster[y * stride..y * stride + stride];
        for x in 0..width / 2 {
            let rx = width - 1 - x;
            line.swap(x * 3, rx * 3);
            line.swap(x * 3 + 1, rx * 3 + 1);
            line.swap(x * 3 + 2, rx * 3 + 2);
        }
    }
}

/// Count the number of distinct RGB24 colors in the raster.
pub fn count_colors(width: u32, height: u32, raster: &[u8]) -> usize {
    let mut seen = BTreeSet::new();
    let total = width as usize * height as usize;
    for px in raster.chunks(3).take(total) {
        let color = u32::from(px[0]) | (u32::from(px[1]) << 8) | (u32::from(px[2]) << 16);
        seen.insert(color);
    }
    seen.len()
}
