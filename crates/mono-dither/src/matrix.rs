//! Threshold matrix generation for ordered dithering.
//!
//! Matrices are built by bit interleaving instead of being stored as
//! tables. For order `N` the matrix is `2^N x 2^N`; the entry at `(x, y)` is
//! formed from the bits of `y` and `x XOR y`, most significant bit first,
//! packed into the result from its least significant end:
//!
//! ```text
//! order 1:        order 2:
//!   0 128           0 128  32 160
//! 192  64         192  64 224  96
//!                  48 176  16 144
//!                 240 112 208  80
//! ```
//!
//! Raw values span `0..4^N` and are scaled into the 8-bit comparison range
//! by `(v << 8) >> 2N`. For orders up to 4 this is the usual `v << (8 - 2N)`;
//! larger orders lose their low bits to keep the range at `0..=255`.

use crate::error::DitherError;

/// Largest supported order (a 256x256 matrix).
pub const MAX_ORDER: u32 = 8;

/// Order used when none is configured (16x16 matrix).
pub const DEFAULT_ORDER: u32 = 4;

/// A square ordered-dithering threshold matrix with 8-bit entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdMatrix {
    order: u32,
    dimension: usize,
    values: Vec<u8>,
}

impl ThresholdMatrix {
    /// Generate the matrix of the given order.
    ///
    /// Returns [`DitherError::UnsupportedMatrixOrder`] for order 0 or for
    /// orders above [`MAX_ORDER`].
    ///
    /// # Example
    ///
    /// ```
    /// use mono_dither::ThresholdMatrix;
    ///
    /// let matrix = ThresholdMatrix::generate(1).unwrap();
    /// assert_eq!(matrix.values(), &[0, 128, 192, 64]);
    /// ```
    pub fn generate(order: u32) -> Result<Self, DitherError> {
        if order == 0 || order > MAX_ORDER {
            return Err(DitherError::UnsupportedMatrixOrder { order });
        }

        let dimension = 1usize << order;
        let mut values = Vec::with_capacity(dimension * dimension);
        for y in 0..dimension {
            for x in 0..dimension {
                let v = interleave(x as u32, y as u32, order);
                values.push(((v << 8) >> (2 * order)) as u8);
            }
        }

        Ok(Self {
            order,
            dimension,
            values,
        })
    }

    #[inline]
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Side length, `2^order`.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Threshold for an image position; the matrix tiles in both axes.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.values[(row % self.dimension) * self.dimension + col % self.dimension]
    }

    /// Row-major entries.
    #[inline]
    pub fn values(&self) -> &[u8] {
        &self.values
    }
}

/// Interleave the bits of `y` and `x ^ y` into a `2 * order`-bit value.
fn interleave(x: u32, y: u32, order: u32) -> u32 {
    let yc = y;
    let xc = x ^ y;
    let mut v = 0;
    let mut bit = 0;
    for mask in (0..order).rev() {
        v |= ((yc >> mask) & 1) << bit;
        bit += 1;
        v |= ((xc >> mask) & 1) << bit;
        bit += 1;
    }
    v
}
