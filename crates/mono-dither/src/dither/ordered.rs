//! Ordered dithering against a tiled threshold matrix.
//!
//! Unlike error diffusion, every pixel is decided independently:
//!
//! ```text
//! threshold = min(coefficient * matrix[row % dim][col % dim], 254)
//! output    = sample > threshold ? 255 : 0
//! ```
//!
//! A uniform input therefore produces a pattern that repeats every `dim`
//! pixels in both axes.

use super::{Dither, BLACK, WHITE};
use crate::buffer::SampleBuffer;
use crate::error::DitherError;
use crate::matrix::ThresholdMatrix;

/// Upper bound for scaled thresholds.
///
/// An order-4 matrix tops out at 255 and coefficients above 1 push entries
/// past the 8-bit range; capping keeps pure white white.
const MAX_THRESHOLD: u32 = 254;

/// Ordered dithering with a generated threshold matrix.
///
/// Scaled thresholds are capped at 254, so a sample of 255 always comes out
/// white whatever the order or coefficient.
///
/// # Example
///
/// ```
/// use mono_dither::{Dither, OrderedDither, SampleBuffer};
///
/// let ditherer = OrderedDither::new(1).unwrap();
/// let mut buffer = SampleBuffer::from_luma(2, 2, &[100; 4]).unwrap();
/// ditherer.dither(&mut buffer).unwrap();
///
/// // Thresholds are [[0, 128], [192, 64]]
/// assert_eq!(buffer.as_raw(), &[255, 0, 0, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedDither {
    matrix: ThresholdMatrix,
    coefficient: u32,
}

impl OrderedDither {
    /// Ordered dithering with a generated matrix of `order` and coefficient 1.
    pub fn new(order: u32) -> Result<Self, DitherError> {
        Ok(Self::with_matrix(ThresholdMatrix::generate(order)?, 1))
    }

    /// Ordered dithering with an explicit matrix and coefficient.
    pub fn with_matrix(matrix: ThresholdMatrix, coefficient: u32) -> Self {
        Self {
            matrix,
            coefficient,
        }
    }

    /// Set the scale applied to matrix entries before comparison.
    #[inline]
    pub fn coefficient(mut self, coefficient: u32) -> Self {
        self.coefficient = coefficient;
        self
    }

    #[inline]
    pub fn matrix(&self) -> &ThresholdMatrix {
        &self.matrix
    }

    /// Effective threshold for an image position.
    #[inline]
    fn threshold(&self, row: usize, col: usize) -> u32 {
        self.coefficient
            .saturating_mul(u32::from(self.matrix.get(row, col)))
            .min(MAX_THRESHOLD)
    }
}

impl Dither for OrderedDither {
    fn dither(&self, buffer: &mut SampleBuffer) -> Result<(), DitherError> {
        buffer.ensure_supported()?;

        let width = buffer.width();
        for (idx, sample) in buffer.luma_values_mut().enumerate() {
            let (row, col) = (idx / width, idx % width);
            *sample = if u32::from(*sample) > self.threshold(row, col) {
                WHITE
            } else {
                BLACK
            };
        }
        Ok(())
    }
}
