//! PNG boundary: decoding to luminance samples and encoding dithered output.

pub mod decode;
pub mod encode;
pub mod grayscale;

pub use decode::{decode_png, DecodedImage};
pub use encode::{encode_png, optimize_png, OutputFormat};
