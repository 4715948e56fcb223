//! Conversion of decoded PNG pixels to luminance samples.
//!
//! Color images are reduced with the fixed-point Rec. 709 weights libpng
//! uses for its default RGB-to-gray transform (6968, 23434 and 2366 out of
//! 32768). Alpha is kept as the second channel.

use crate::error::CodecError;

const RED_WEIGHT: u32 = 6968;
const GREEN_WEIGHT: u32 = 23434;
const BLUE_WEIGHT: u32 = 2366;

/// Rounded luminance of an 8-bit RGB triple.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let sum =
        RED_WEIGHT * u32::from(r) + GREEN_WEIGHT * u32::from(g) + BLUE_WEIGHT * u32::from(b);
    ((sum + (1 << 14)) >> 15) as u8
}

/// Reduce 8-bit decoded pixels to luminance (+ alpha).
///
/// Returns the converted bytes and their channel stride: 1 for gray and
/// RGB input, 2 for gray+alpha and RGBA input.
pub fn to_luma(color_type: png::ColorType, data: Vec<u8>) -> Result<(Vec<u8>, usize), CodecError> {
    match color_type {
        png::ColorType::Grayscale => Ok((data, 1)),
        png::ColorType::GrayscaleAlpha => Ok((data, 2)),
        png::ColorType::Rgb => Ok((
            data.chunks_exact(3)
                .map(|p| luminance(p[0], p[1], p[2]))
                .collect(),
            1,
        )),
        png::ColorType::Rgba => Ok((
            data.chunks_exact(4)
                .flat_map(|p| [luminance(p[0], p[1], p[2]), p[3]])
                .collect(),
            2,
        )),
        // Palette images are expanded to RGB(A) by the decoder
        png::ColorType::Indexed => Err(CodecError::UnsupportedColorType(color_type)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(luminance(0, 0, 0), 0);
        assert_eq!(luminance(255, 255, 255), 255);
    }

    #[test]
    fn test_luminance_gray_is_identity() {
        for v in 0..=255u8 {
            assert_eq!(luminance(v, v, v), v);
        }
    }

    #[test]
    fn test_luminance_weights_green_heaviest() {
        assert_eq!(luminance(255, 0, 0), 54);
        assert_eq!(luminance(0, 255, 0), 182);
        assert_eq!(luminance(0, 0, 255), 18);
    }

    #[test]
    fn test_gray_passes_through() {
        let (data, stride) = to_luma(png::ColorType::Grayscale, vec![1, 2, 3]).unwrap();
        assert_eq!((data, stride), (vec![1, 2, 3], 1));

        let (data, stride) = to_luma(png::ColorType::GrayscaleAlpha, vec![1, 9, 2, 8]).unwrap();
        assert_eq!((data, stride), (vec![1, 9, 2, 8], 2));
    }

    #[test]
    fn test_rgb_reduces_to_one_channel() {
        let (data, stride) =
            to_luma(png::ColorType::Rgb, vec![255, 255, 255, 0, 255, 0]).unwrap();
        assert_eq!(stride, 1);
        assert_eq!(data, vec![255, 182]);
    }

    #[test]
    fn test_rgba_keeps_alpha() {
        let (data, stride) =
            to_luma(png::ColorType::Rgba, vec![10, 10, 10, 77, 0, 0, 0, 200]).unwrap();
        assert_eq!(stride, 2);
        assert_eq!(data, vec![10, 77, 0, 200]);
    }

    #[test]
    fn test_indexed_is_rejected() {
        assert!(matches!(
            to_luma(png::ColorType::Indexed, vec![0]),
            Err(CodecError::UnsupportedColorType(png::ColorType::Indexed))
        ));
    }
}
