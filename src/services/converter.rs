use crate::codec::{decode_png, encode_png, optimize_png, OutputFormat};
use crate::error::ConvertError;
use crate::models::AppConfig;
use mono_dither::{DitherError, DitherSummary, Pipeline, SampleBuffer};
use std::path::Path;

/// What happened to the pixels of a converted image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Dithered(DitherSummary),
    /// Color model could not be dithered; pixels were written unchanged
    Untouched { channels: usize },
}

/// Result of converting one PNG
#[derive(Debug)]
pub struct Conversion {
    pub png: Vec<u8>,
    pub outcome: Outcome,
    pub width: usize,
    pub height: usize,
}

/// Decode, dither and re-encode PNG images with one configuration
pub struct Converter {
    pipeline: Pipeline,
    format: OutputFormat,
    optimize: bool,
    strict: bool,
    max_pixels: usize,
}

impl Converter {
    /// Fails early when the configured matrix order is invalid
    pub fn new(config: &AppConfig) -> Result<Self, ConvertError> {
        Ok(Self {
            pipeline: Pipeline::new(config.dither_options())?,
            format: config.output_format(),
            optimize: config.optimize,
            strict: config.strict,
            max_pixels: config.max_pixels,
        })
    }

    /// Dither a buffer in place, passing unsupported color models through
    /// unless running strict
    pub fn dither_buffer(&self, buffer: &mut SampleBuffer) -> Result<Outcome, ConvertError> {
        match self.pipeline.run(buffer) {
            Ok(summary) => Ok(Outcome::Dithered(summary)),
            Err(DitherError::UnsupportedColorModel { channels }) if !self.strict => {
                tracing::warn!(channels, "Unsupported color model, writing image unchanged");
                Ok(Outcome::Untouched { channels })
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn encode(&self, buffer: &SampleBuffer) -> Result<Vec<u8>, ConvertError> {
        let png = encode_png(buffer, self.format)?;
        Ok(if self.optimize { optimize_png(png) } else { png })
    }

    /// Convert PNG bytes to dithered PNG bytes
    pub fn convert_png(&self, input: &[u8]) -> Result<Conversion, ConvertError> {
        let mut image = decode_png(input, self.max_pixels)?;
        let outcome = self.dither_buffer(&mut image.buffer)?;
        let png = self.encode(&image.buffer)?;

        Ok(Conversion {
            png,
            outcome,
            width: image.buffer.width(),
            height: image.buffer.height(),
        })
    }

    /// Convert a file. The output is only written once conversion succeeded.
    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<Conversion, ConvertError> {
        let bytes = std::fs::read(input).map_err(|source| ConvertError::ReadInput {
            path: input.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %input.display(), bytes = bytes.len(), "Read input");

        let conversion = self.convert_png(&bytes)?;

        std::fs::write(output, &conversion.png).map_err(|source| ConvertError::WriteOutput {
            path: output.to_path_buf(),
            source,
        })?;
        tracing::info!(
            path = %output.display(),
            bytes = conversion.png.len(),
            "Wrote output"
        );

        Ok(conversion)
    }
}
