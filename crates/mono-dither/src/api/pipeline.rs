//! Pipeline -- binds a configured ditherer to sample buffers.
//!
//! [`Pipeline`] validates [`DitherOptions`] once, then applies the selected
//! algorithm to any number of buffers.

use tracing::debug;

use crate::buffer::SampleBuffer;
use crate::dither::{Dither, DitherMode, DitherOptions, FloydSteinberg, OrderedDither, WHITE};
use crate::error::DitherError;
use crate::matrix::ThresholdMatrix;

/// Result of a successful pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DitherSummary {
    /// Algorithm that produced the output.
    pub mode: DitherMode,
    pub width: usize,
    pub height: usize,
    /// Luminance samples quantized to white.
    pub white_pixels: usize,
}

impl DitherSummary {
    /// Luminance samples quantized to black.
    #[inline]
    pub fn black_pixels(&self) -> usize {
        self.width * self.height - self.white_pixels
    }
}

/// Configured two-tone dithering pipeline.
///
/// - Construction validates the options (the threshold matrix for ordered
///   mode is generated here, so a bad order fails early)
/// - [`run()`](Self::run) takes `&self`, so one pipeline serves many images
///
/// # Example
///
/// ```
/// use mono_dither::{DitherMode, DitherOptions, Pipeline, SampleBuffer};
///
/// let pipeline = Pipeline::new(DitherOptions::new().mode(DitherMode::FloydSteinberg)).unwrap();
/// let mut buffer = SampleBuffer::from_luma(2, 2, &[100, 200, 50, 150]).unwrap();
///
/// let summary = pipeline.run(&mut buffer).unwrap();
/// assert_eq!(summary.white_pixels, 2);
/// assert_eq!(buffer.as_raw(), &[0, 255, 0, 255]);
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    options: DitherOptions,
    ditherer: Ditherer,
}

#[derive(Debug, Clone)]
enum Ditherer {
    FloydSteinberg(FloydSteinberg),
    Ordered(OrderedDither),
}

impl Ditherer {
    fn as_dither(&self) -> &dyn Dither {
        match self {
            Ditherer::FloydSteinberg(d) => d,
            Ditherer::Ordered(d) => d,
        }
    }
}

impl Pipeline {
    /// Build a pipeline from options.
    ///
    /// Fails with [`DitherError::UnsupportedMatrixOrder`] when ordered mode
    /// is selected with an order outside `1..=8`.
    pub fn new(options: DitherOptions) -> Result<Self, DitherError> {
        let ditherer = match options.mode {
            DitherMode::FloydSteinberg => Ditherer::FloydSteinberg(FloydSteinberg),
            DitherMode::Ordered => {
                let matrix = ThresholdMatrix::generate(options.order)?;
                Ditherer::Ordered(OrderedDither::with_matrix(matrix, options.coefficient))
            }
        };
        Ok(Self { options, ditherer })
    }

    #[inline]
    pub fn options(&self) -> &DitherOptions {
        &self.options
    }

    /// Dither `buffer` in place.
    ///
    /// The buffer is left untouched when it exceeds the configured pixel
    /// limit ([`DitherError::ImageTooLarge`]) or carries an unsupported
    /// color model ([`DitherError::UnsupportedColorModel`]).
    pub fn run(&self, buffer: &mut SampleBuffer) -> Result<DitherSummary, DitherError> {
        let (width, height) = (buffer.width(), buffer.height());
        if buffer.pixel_count() > self.options.max_pixels {
            return Err(DitherError::ImageTooLarge {
                width,
                height,
                max_pixels: self.options.max_pixels,
            });
        }

        debug!(
            width,
            height,
            channels = buffer.channel_stride(),
            mode = %self.options.mode,
            "Dithering sample buffer"
        );
        self.ditherer.as_dither().dither(buffer)?;

        let white_pixels = buffer.luma_values().filter(|&v| v == WHITE).count();
        debug!(white_pixels, "Dithering complete");

        Ok(DitherSummary {
            mode: self.options.mode,
            width,
            height,
            white_pixels,
        })
    }
}
