//! Two-tone dithering algorithms.
//!
//! # Algorithms
//!
//! - **Floyd-Steinberg** ([`FloydSteinberg`]): error diffusion in a single
//!   raster pass. Preserves local average luminance; output depends on
//!   scan order.
//! - **Ordered** ([`OrderedDither`]): per-pixel comparison against a tiled
//!   [`ThresholdMatrix`](crate::ThresholdMatrix). Cheaper, and the output is
//!   a fixed repeating pattern for uniform input.
//!
//! # Architecture
//!
//! Both algorithms implement the [`Dither`] trait and write `0` or `255`
//! into the luminance channel of a [`SampleBuffer`] in place. Configuration
//! is done via [`DitherOptions`]; [`Pipeline`](crate::Pipeline) selects the
//! algorithm from it.

mod floyd_steinberg;
mod options;
mod ordered;

pub use floyd_steinberg::FloydSteinberg;
pub use options::{DitherOptions, DEFAULT_MAX_PIXELS};
pub use ordered::OrderedDither;

use std::fmt;

use crate::buffer::SampleBuffer;
use crate::error::DitherError;

/// Luminance written for samples quantized to white.
pub const WHITE: u8 = 255;

/// Luminance written for samples quantized to black.
pub const BLACK: u8 = 0;

/// In-place two-tone quantization of a sample buffer.
///
/// Implementations only read and write the first channel of each pixel.
/// Buffers with more than two channels per pixel are rejected with
/// [`DitherError::UnsupportedColorModel`] before any sample is modified.
pub trait Dither {
    /// Quantize every luminance sample of `buffer` to [`BLACK`] or [`WHITE`].
    fn dither(&self, buffer: &mut SampleBuffer) -> Result<(), DitherError>;
}

/// Dither algorithm selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DitherMode {
    /// Floyd-Steinberg error diffusion.
    FloydSteinberg,
    /// Ordered dithering against a generated threshold matrix.
    #[default]
    Ordered,
}

impl DitherMode {
    /// Stable name used in configuration files and log output.
    pub fn as_str(self) -> &'static str {
        match self {
            DitherMode::FloydSteinberg => "floyd-steinberg",
            DitherMode::Ordered => "ordered",
        }
    }
}

impl fmt::Display for DitherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DitherMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "floyd-steinberg" | "floyd_steinberg" | "fs" => Ok(DitherMode::FloydSteinberg),
            "ordered" | "bayer" => Ok(DitherMode::Ordered),
            other => Err(format!(
                "unknown dither mode '{other}' (expected 'floyd-steinberg' or 'ordered')"
            )),
        }
    }
}
