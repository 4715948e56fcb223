//! Grayscale sample buffer with an explicit channel stride.
//!
//! [`SampleBuffer`] owns one contiguous row-major byte buffer. Each pixel
//! occupies `channel_stride` bytes; the first byte of every group is the
//! luminance sample and the remaining bytes (alpha, for grayscale+alpha
//! images) are carried through untouched.

use crate::error::DitherError;

/// Row-major grayscale pixel data addressed by `(row, col)`.
///
/// # Example
///
/// ```
/// use mono_dither::SampleBuffer;
///
/// // 2x1 grayscale+alpha image
/// let mut buffer = SampleBuffer::new(2, 1, 2, vec![10, 255, 20, 128]).unwrap();
/// assert_eq!(buffer.get(0, 1).unwrap(), 20);
///
/// buffer.set(0, 1, 0).unwrap();
/// assert_eq!(buffer.as_raw(), &[10, 255, 0, 128]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBuffer {
    width: usize,
    height: usize,
    channel_stride: usize,
    data: Vec<u8>,
}

impl SampleBuffer {
    /// Wrap decoded pixel bytes.
    ///
    /// Rejects zero dimensions, a zero stride, and data whose length is not
    /// `width * height * channel_stride`. Strides above 2 are accepted here;
    /// the ditherers refuse them with [`DitherError::UnsupportedColorModel`].
    pub fn new(
        width: usize,
        height: usize,
        channel_stride: usize,
        data: Vec<u8>,
    ) -> Result<Self, DitherError> {
        if width == 0 || height == 0 {
            return Err(DitherError::InvalidBuffer {
                reason: format!("dimensions must be positive, got {width}x{height}"),
            });
        }
        if channel_stride == 0 {
            return Err(DitherError::InvalidBuffer {
                reason: "channel stride must be positive".to_string(),
            });
        }

        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(channel_stride))
            .ok_or_else(|| DitherError::InvalidBuffer {
                reason: format!("{width}x{height}x{channel_stride} overflows usize"),
            })?;
        if data.len() != expected {
            return Err(DitherError::InvalidBuffer {
                reason: format!(
                    "expected {expected} bytes for {width}x{height} with stride {channel_stride}, got {}",
                    data.len()
                ),
            });
        }

        Ok(Self {
            width,
            height,
            channel_stride,
            data,
        })
    }

    /// Build a single-channel buffer from luminance bytes.
    pub fn from_luma(width: usize, height: usize, luma: &[u8]) -> Result<Self, DitherError> {
        Self::new(width, height, 1, luma.to_vec())
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn channel_stride(&self) -> usize {
        self.channel_stride
    }

    /// Number of pixels (not bytes).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Whether the ditherers accept this buffer (grayscale or grayscale+alpha).
    #[inline]
    pub fn is_supported(&self) -> bool {
        matches!(self.channel_stride, 1 | 2)
    }

    /// Fail with [`DitherError::UnsupportedColorModel`] unless the stride is 1 or 2.
    pub(crate) fn ensure_supported(&self) -> Result<(), DitherError> {
        if self.is_supported() {
            Ok(())
        } else {
            Err(DitherError::UnsupportedColorModel {
                channels: self.channel_stride,
            })
        }
    }

    /// Read the luminance sample at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<u8, DitherError> {
        let idx = self.index(row, col)?;
        Ok(self.data[idx])
    }

    /// Write the luminance sample at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: u8) -> Result<(), DitherError> {
        let idx = self.index(row, col)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Luminance samples in scan order, skipping non-luminance channels.
    pub fn luma_values(&self) -> impl Iterator<Item = u8> + '_ {
        self.data.iter().step_by(self.channel_stride).copied()
    }

    /// Mutable luminance samples in scan order.
    pub(crate) fn luma_values_mut(&mut self) -> impl Iterator<Item = &mut u8> + '_ {
        self.data.iter_mut().step_by(self.channel_stride)
    }

    /// The raw interleaved bytes.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, returning the raw interleaved bytes.
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, DitherError> {
        if row >= self.height || col >= self.width {
            return Err(DitherError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(row * self.width * self.channel_stride + col * self.channel_stride)
    }
}
