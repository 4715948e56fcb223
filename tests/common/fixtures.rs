//! Test fixtures: small PNG images built in memory.

use std::path::{Path, PathBuf};

/// The 2x2 image whose Floyd-Steinberg result is worked out by hand
pub const REFERENCE_LUMA: [u8; 4] = [100, 200, 50, 150];

/// Expected Floyd-Steinberg output for [`REFERENCE_LUMA`]
pub const REFERENCE_FLOYD_STEINBERG: [u8; 4] = [0, 255, 0, 255];

/// Encode raw samples as a PNG with the given color type and depth
pub fn png_bytes(
    width: u32,
    height: u32,
    color: png::ColorType,
    depth: png::BitDepth,
    data: &[u8],
) -> Vec<u8> {
    let mut bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, width, height);
        encoder.set_color(color);
        encoder.set_depth(depth);
        let mut writer = encoder.write_header().expect("PNG header");
        writer.write_image_data(data).expect("PNG data");
    }
    bytes
}

/// 8-bit grayscale PNG
pub fn gray_png(width: u32, height: u32, luma: &[u8]) -> Vec<u8> {
    png_bytes(width, height, png::ColorType::Grayscale, png::BitDepth::Eight, luma)
}

/// Horizontal gradient, 0 on the left to 255 on the right
pub fn gradient_luma(width: u32, height: u32) -> Vec<u8> {
    let max = (width - 1).max(1);
    (0..height)
        .flat_map(|_| (0..width).map(move |x| (x * 255 / max) as u8))
        .collect()
}

/// Write a PNG fixture into `dir` and return its path
pub fn write_fixture(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("write fixture");
    path
}
