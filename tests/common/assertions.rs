//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

/// Decoded PNG: raw samples plus the header fields tests care about
pub struct DecodedPng {
    pub width: u32,
    pub height: u32,
    pub color_type: png::ColorType,
    pub bit_depth: png::BitDepth,
    pub data: Vec<u8>,
}

/// Decode PNG bytes without any transformations
pub fn decode_raw(bytes: &[u8]) -> DecodedPng {
    let decoder = png::Decoder::new(bytes);
    let mut reader = decoder.read_info().expect("valid PNG header");
    let mut data = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut data).expect("valid PNG frame");
    data.truncate(frame.buffer_size());
    DecodedPng {
        width: frame.width,
        height: frame.height,
        color_type: frame.color_type,
        bit_depth: frame.bit_depth,
        data,
    }
}

/// Assert bytes start with the PNG signature
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert every sample is pure black or pure white
pub fn assert_binary(samples: impl IntoIterator<Item = u8>) {
    for (i, value) in samples.into_iter().enumerate() {
        assert!(
            value == 0 || value == 255,
            "Sample {i} is {value}, expected 0 or 255"
        );
    }
}

/// Assert a PNG has the expected dimensions
pub fn assert_dimensions(png: &DecodedPng, width: u32, height: u32) {
    assert_eq!(
        (png.width, png.height),
        (width, height),
        "Unexpected output dimensions"
    );
}
