//! mono-dither: two-tone dithering for grayscale sample buffers
//!
//! This library reduces 8-bit grayscale images to pure black and white
//! for 1-bit displays and printers.
//!
//! # Quick Start
//!
//! The [`Pipeline`] is the primary entry point:
//!
//! ```
//! use mono_dither::{DitherOptions, Pipeline, SampleBuffer};
//!
//! let pipeline = Pipeline::new(DitherOptions::default()).unwrap();
//! let mut buffer = SampleBuffer::from_luma(4, 4, &[128; 16]).unwrap();
//!
//! let summary = pipeline.run(&mut buffer).unwrap();
//! assert!(buffer.luma_values().all(|v| v == 0 || v == 255));
//! assert_eq!(summary.white_pixels + summary.black_pixels(), 16);
//! ```
//!
//! # Sample Buffers
//!
//! [`SampleBuffer`] holds decoded pixels with an explicit channel stride:
//! 1 for grayscale, 2 for grayscale+alpha. Only the first channel of each
//! pixel is read or written; alpha passes through bit-identical. Buffers
//! with more channels are accepted but every ditherer refuses them with
//! [`DitherError::UnsupportedColorModel`] and leaves them unchanged, so a
//! caller can tell dithered output from untouched output.
//!
//! # Dithering Algorithms
//!
//! - [`FloydSteinberg`]: error diffusion (7/16, 3/16, 5/16, 1/16) in an
//!   `i32` working buffer
//! - [`OrderedDither`]: comparison against a tiled [`ThresholdMatrix`]
//!   generated by bit interleaving (default order 4, a 16x16 matrix)
//!
//! Both implement [`Dither`] and can be used directly without a pipeline.

pub mod api;
pub mod buffer;
pub mod dither;
pub mod error;
pub mod matrix;


pub use api::{DitherSummary, Pipeline};
pub use buffer::SampleBuffer;
pub use dither::{
    Dither, DitherMode, DitherOptions, FloydSteinberg, OrderedDither, BLACK, DEFAULT_MAX_PIXELS,
    WHITE,
};
pub use error::DitherError;
pub use matrix::{ThresholdMatrix, DEFAULT_ORDER, MAX_ORDER};
