pub mod config;

pub use config::{AppConfig, ConfigOverrides, DEFAULT_OUTPUT_FILENAME};
