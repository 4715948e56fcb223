//! dither-png - grayscale PNG to pure black and white
//!
//! PNG decoding, configuration and file handling around the `mono-dither`
//! engine. This library exposes modules for integration testing.

pub mod codec;
pub mod error;
pub mod models;
pub mod services;
