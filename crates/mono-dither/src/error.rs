//! Error type for the mono-dither crate.
//!
//! Every fallible operation in the crate returns [`DitherError`]. None of the
//! variants is retried internally: the caller decides whether a condition
//! such as [`DitherError::UnsupportedColorModel`] is fatal.

use thiserror::Error;

/// Errors reported by sample buffers, matrix generation and the ditherers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DitherError {
    /// The diffusion working buffer could not be allocated.
    #[error("failed to allocate {bytes} bytes for the dithering working buffer")]
    Allocation { bytes: usize },

    /// The buffer carries more than two channels per pixel (e.g. RGB).
    ///
    /// The buffer is left untouched when this is returned.
    #[error("unsupported color model: {channels} channels per pixel (expected 1 or 2)")]
    UnsupportedColorModel { channels: usize },

    /// Threshold matrix order outside the range the 8-bit scaling supports.
    #[error("unsupported threshold matrix order {order} (supported: 1..=8)")]
    UnsupportedMatrixOrder { order: u32 },

    /// Sample access outside the buffer's declared dimensions.
    #[error("sample ({row}, {col}) out of bounds for {width}x{height} buffer")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    /// Raw data does not describe a valid buffer.
    #[error("invalid sample buffer: {reason}")]
    InvalidBuffer { reason: String },

    /// The image exceeds the configured pixel limit.
    #[error("image too large: {width}x{height} exceeds the limit of {max_pixels} pixels")]
    ImageTooLarge {
        width: usize,
        height: usize,
        max_pixels: usize,
    },
}
