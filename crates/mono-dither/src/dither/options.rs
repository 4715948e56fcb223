//! Dithering options and configuration.
//!
//! This module provides the [`DitherOptions`] struct consumed by
//! [`Pipeline`](crate::Pipeline).

use super::DitherMode;
use crate::matrix::DEFAULT_ORDER;

/// Default pixel limit: 8192 x 8192.
pub const DEFAULT_MAX_PIXELS: usize = 8192 * 8192;

/// Configuration for a dithering run.
///
/// # Defaults
///
/// - Mode: ordered dithering
/// - Matrix order: 4 (16x16 matrix spanning the full 8-bit range)
/// - Coefficient: 1
/// - Pixel limit: [`DEFAULT_MAX_PIXELS`]
///
/// # Example
///
/// ```
/// use mono_dither::{DitherMode, DitherOptions};
///
/// let options = DitherOptions::new()
///     .mode(DitherMode::Ordered)
///     .order(3)
///     .coefficient(1);
/// assert_eq!(options.order, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DitherOptions {
    /// Algorithm to run.
    pub mode: DitherMode,

    /// Threshold matrix order for ordered dithering (matrix side `2^order`).
    ///
    /// Ignored by Floyd-Steinberg.
    pub order: u32,

    /// Scale applied to matrix entries before comparison.
    ///
    /// 1 for generated full-range matrices. Ignored by Floyd-Steinberg.
    pub coefficient: u32,

    /// Largest `width * height` the pipeline will process.
    pub max_pixels: usize,
}

impl Default for DitherOptions {
    fn default() -> Self {
        Self {
            mode: DitherMode::default(),
            order: DEFAULT_ORDER,
            coefficient: 1,
            max_pixels: DEFAULT_MAX_PIXELS,
        }
    }
}

impl DitherOptions {
    /// Create new dither options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn mode(mut self, mode: DitherMode) -> Self {
        self.mode = mode;
        self
    }

    #[inline]
    pub fn order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    #[inline]
    pub fn coefficient(mut self, coefficient: u32) -> Self {
        self.coefficient = coefficient;
        self
    }

    #[inline]
    pub fn max_pixels(mut self, max_pixels: usize) -> Self {
        self.max_pixels = max_pixels;
        self
    }
}
