use crate::codec::OutputFormat;
use crate::error::ConfigError;
use mono_dither::{DitherMode, DitherOptions, DEFAULT_MAX_PIXELS, DEFAULT_ORDER};
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

/// Output file used when none is given
pub const DEFAULT_OUTPUT_FILENAME: &str = "out.png";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Dithering algorithm ("ordered" or "floyd-steinberg")
    #[serde(deserialize_with = "deserialize_mode")]
    pub mode: DitherMode,

    /// Threshold matrix order for ordered dithering
    pub order: u32,

    /// Scale applied to threshold matrix entries
    pub coefficient: u32,

    /// Largest image (width * height) that will be decoded
    pub max_pixels: usize,

    /// Output path used when none is given on the command line
    pub output: PathBuf,

    /// Write 1-bit grayscale PNGs
    pub one_bit: bool,

    /// Re-compress output with oxipng
    pub optimize: bool,

    /// Fail instead of passing through images that cannot be dithered
    pub strict: bool,
}

fn deserialize_mode<'de, D>(deserializer: D) -> Result<DitherMode, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: DitherMode::default(),
            order: DEFAULT_ORDER,
            coefficient: 1,
            max_pixels: DEFAULT_MAX_PIXELS,
            output: PathBuf::from(DEFAULT_OUTPUT_FILENAME),
            one_bit: false,
            optimize: false,
            strict: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(
            path = %path.display(),
            mode = %config.mode,
            order = config.order,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Options for the dithering pipeline
    pub fn dither_options(&self) -> DitherOptions {
        DitherOptions::new()
            .mode(self.mode)
            .order(self.order)
            .coefficient(self.coefficient)
            .max_pixels(self.max_pixels)
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.one_bit {
            OutputFormat::OneBit
        } else {
            OutputFormat::EightBit
        }
    }
}

/// Command-line values that take precedence over the configuration file
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub mode: Option<DitherMode>,
    pub order: Option<u32>,
    pub coefficient: Option<u32>,
    pub max_pixels: Option<usize>,
    pub output: Option<PathBuf>,
    /// Flags only switch features on
    pub one_bit: bool,
    pub optimize: bool,
    pub strict: bool,
}

impl ConfigOverrides {
    pub fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(order) = self.order {
            config.order = order;
        }
        if let Some(coefficient) = self.coefficient {
            config.coefficient = coefficient;
        }
        if let Some(max_pixels) = self.max_pixels {
            config.max_pixels = max_pixels;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        config.one_bit |= self.one_bit;
        config.optimize |= self.optimize;
        config.strict |= self.strict;
        config
    }
}
