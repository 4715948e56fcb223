//! Floyd-Steinberg error diffusion dithering algorithm.
//!
//! Each sample is quantized to black or white and the difference between
//! the accumulated value and the output is pushed to the four neighbors
//! that have not been visited yet:
//!
//! ```text
//!        X   7
//!    3   5   1
//! ```
//!
//! Weights are sixteenths. Accumulated values routinely leave `0..=255`, so
//! diffusion runs in an `i32` working copy of the luminance channel and the
//! byte buffer is only written once every sample is final.

use std::mem::size_of;

use super::{Dither, BLACK, WHITE};
use crate::buffer::SampleBuffer;
use crate::error::DitherError;

/// Samples strictly above this value quantize to white.
const THRESHOLD: i32 = 128;

const EAST: f64 = 7.0 / 16.0;
const SOUTH_WEST: f64 = 3.0 / 16.0;
const SOUTH: f64 = 5.0 / 16.0;
const SOUTH_EAST: f64 = 1.0 / 16.0;

/// Floyd-Steinberg error diffusion.
///
/// Single raster pass, top-to-bottom and left-to-right. The error is not
/// clamped before it is propagated.
///
/// # Example
///
/// ```
/// use mono_dither::{Dither, FloydSteinberg, SampleBuffer};
///
/// let mut buffer = SampleBuffer::from_luma(2, 2, &[100, 200, 50, 150]).unwrap();
/// FloydSteinberg.dither(&mut buffer).unwrap();
/// assert_eq!(buffer.as_raw(), &[0, 255, 0, 255]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, buffer: &mut SampleBuffer) -> Result<(), DitherError> {
        buffer.ensure_supported()?;

        let width = buffer.width();
        let height = buffer.height();
        let mut work = working_copy(buffer)?;

        for y in 0..height {
            for x in 0..width {
                let idx = y * width + x;
                let current = work[idx];
                let value = if current > THRESHOLD {
                    i32::from(WHITE)
                } else {
                    i32::from(BLACK)
                };
                let error = current - value;
                work[idx] = value;

                if x + 1 < width {
                    spread(&mut work[idx + 1], error, EAST);
                }
                if y + 1 < height {
                    let below = idx + width;
                    if x > 0 {
                        spread(&mut work[below - 1], error, SOUTH_WEST);
                    }
                    spread(&mut work[below], error, SOUTH);
                    if x + 1 < width {
                        spread(&mut work[below + 1], error, SOUTH_EAST);
                    }
                }
            }
        }

        // Every entry is BLACK or WHITE by now.
        for (sample, &value) in buffer.luma_values_mut().zip(&work) {
            *sample = value as u8;
        }
        Ok(())
    }
}

/// Copy the luminance channel into a wide working buffer.
fn working_copy(buffer: &SampleBuffer) -> Result<Vec<i32>, DitherError> {
    let len = buffer.pixel_count();
    let mut work = Vec::new();
    work.try_reserve_exact(len)
        .map_err(|_| DitherError::Allocation {
            bytes: len.saturating_mul(size_of::<i32>()),
        })?;
    work.extend(buffer.luma_values().map(i32::from));
    Ok(work)
}

/// Add a weighted share of `error` to `cell`, truncating the sum toward zero.
#[inline]
fn spread(cell: &mut i32, error: i32, weight: f64) {
    *cell = (f64::from(*cell) + f64::from(error) * weight) as i32;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_known_2x2() {
        // (0,0): 100 -> 0, error +100: east 243, south 81, south-east 156
        // (0,1): 243 -> 255, error -12: south-west 78, south 152
        // (1,0): 78 -> 0, error +78: east 186
        // (1,1): 186 -> 255
        let mut buffer = SampleBuffer::from_luma(2, 2, &[100, 200, 50, 150]).unwrap();
        FloydSteinberg.dither(&mut buffer).unwrap();
        assert_eq!(buffer.as_raw(), &[0, 255, 0, 255]);
    }

    #[test]
    fn test_spread_truncates_sum_toward_zero() {
        let mut cell = 200;
        spread(&mut cell, 100, EAST);
        assert_eq!(cell, 243); // 243.75

        let mut cell = 10;
        spread(&mut cell, -55, EAST);
        assert_eq!(cell, -14); // -14.0625 truncates up, not down to -15

        let mut cell = 81;
        spread(&mut cell, -12, SOUTH_WEST);
        assert_eq!(cell, 78); // 78.75
    }

    #[test]
    fn test_single_pixel() {
        let mut dark = SampleBuffer::from_luma(1, 1, &[128]).unwrap();
        FloydSteinberg.dither(&mut dark).unwrap();
        assert_eq!(dark.as_raw(), &[0]);

        let mut light = SampleBuffer::from_luma(1, 1, &[129]).unwrap();
        FloydSteinberg.dither(&mut light).unwrap();
        assert_eq!(light.as_raw(), &[255]);
    }

    #[test]
    fn test_single_row_only_diffuses_east() {
        // 90 -> 0 (error 90), 90 + 39.375 = 129 -> 255 (error -126),
        // 90 - 55.125 = 34 -> 0
        let mut buffer = SampleBuffer::from_luma(3, 1, &[90, 90, 90]).unwrap();
        FloydSteinberg.dither(&mut buffer).unwrap();
        assert_eq!(buffer.as_raw(), &[0, 255, 0]);
    }

    #[test]
    fn test_single_column_only_diffuses_south() {
        // 100 -> 0, 100 + 31.25 = 131 -> 255, 100 - 38.75 = 61 -> 0
        let mut buffer = SampleBuffer::from_luma(1, 3, &[100, 100, 100]).unwrap();
        FloydSteinberg.dither(&mut buffer).unwrap();
        assert_eq!(buffer.as_raw(), &[0, 255, 0]);
    }

    #[test]
    fn test_preserves_alpha() {
        let data = vec![100, 7, 200, 8, 50, 9, 150, 10];
        let mut buffer = SampleBuffer::new(2, 2, 2, data).unwrap();
        FloydSteinberg.dither(&mut buffer).unwrap();
        assert_eq!(buffer.as_raw(), &[0, 7, 255, 8, 0, 9, 255, 10]);
    }

    #[test]
    fn test_unsupported_stride_is_untouched() {
        let data = vec![100, 150, 200, 10, 20, 30];
        let mut buffer = SampleBuffer::new(2, 1, 3, data.clone()).unwrap();
        assert_eq!(
            FloydSteinberg.dither(&mut buffer),
            Err(DitherError::UnsupportedColorModel { channels: 3 })
        );
        assert_eq!(buffer.as_raw(), data.as_slice());
    }

    #[test]
    fn test_extremes_are_stable() {
        let mut black = SampleBuffer::from_luma(5, 4, &[0; 20]).unwrap();
        FloydSteinberg.dither(&mut black).unwrap();
        assert!(black.luma_values().all(|v| v == 0));

        let mut white = SampleBuffer::from_luma(5, 4, &[255; 20]).unwrap();
        FloydSteinberg.dither(&mut white).unwrap();
        assert!(white.luma_values().all(|v| v == 255));
    }

    #[test]
    fn test_preserves_average_luminance() {
        let size = 64;
        let mut buffer = SampleBuffer::from_luma(size, size, &vec![64; size * size]).unwrap();
        FloydSteinberg.dither(&mut buffer).unwrap();

        let white = buffer.luma_values().filter(|&v| v == 255).count();
        let ratio = white as f64 / (size * size) as f64;
        assert!(
            (ratio - 0.25).abs() < 0.05,
            "Expected ~0.25 white ratio for luminance 64, got {ratio}"
        );
    }
}
