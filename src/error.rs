use mono_dither::DitherError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Dither error: {0}")]
    Dither(#[from] DitherError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("PNG decode error: {0}")]
    Decode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("Image too large: {width}x{height} (max {max_pixels} pixels)")]
    ImageTooLarge {
        width: u32,
        height: u32,
        max_pixels: usize,
    },

    #[error("Unsupported PNG color type: {0:?}")]
    UnsupportedColorType(png::ColorType),

    #[error("Unsupported channel count: {0}")]
    UnsupportedChannels(usize),

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: usize, height: usize },

    #[error("Invalid pixel data: {0}")]
    Pixels(#[from] DitherError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}
