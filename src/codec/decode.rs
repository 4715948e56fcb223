//! PNG decoding into a [`SampleBuffer`].

use std::io::Read;

use mono_dither::SampleBuffer;

use super::grayscale;
use crate::error::CodecError;

/// Decoded image ready for dithering.
#[derive(Debug)]
pub struct DecodedImage {
    pub buffer: SampleBuffer,
    /// Color type stored in the file, before expansion and gray conversion.
    pub source_color: png::ColorType,
    /// Bit depth stored in the file, before expansion or stripping.
    pub source_depth: png::BitDepth,
}

/// Decoder working-memory budget per allowed pixel (16-bit RGBA).
const DECODER_BYTES_PER_PIXEL: usize = 8;

/// Lower bound on the decoder budget so ancillary chunks of tiny images decode.
const MIN_DECODER_BYTES: usize = 1024 * 1024;

/// Decode a PNG stream to 8-bit luminance (+ alpha).
///
/// Palette and low bit-depth images are expanded, 16-bit samples are
/// stripped to 8 bits, and color images are reduced to gray. Images larger
/// than `max_pixels` are refused from the header, before the frame buffer is
/// allocated.
pub fn decode_png<R: Read>(reader: R, max_pixels: usize) -> Result<DecodedImage, CodecError> {
    let limits = png::Limits {
        bytes: max_pixels
            .saturating_mul(DECODER_BYTES_PER_PIXEL)
            .max(MIN_DECODER_BYTES),
    };
    let mut decoder = png::Decoder::new_with_limits(reader, limits);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder.read_info()?;
    let (width, height, source_color, source_depth) = {
        let info = reader.info();
        (info.width, info.height, info.color_type, info.bit_depth)
    };

    let pixels = (width as usize).saturating_mul(height as usize);
    if pixels > max_pixels {
        return Err(CodecError::ImageTooLarge {
            width,
            height,
            max_pixels,
        });
    }

    let mut data = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut data)?;
    data.truncate(frame.buffer_size());

    let (luma, stride) = grayscale::to_luma(frame.color_type, data)?;
    let buffer = SampleBuffer::new(width as usize, height as usize, stride, luma)?;

    tracing::debug!(
        width,
        height,
        ?source_color,
        ?source_depth,
        channels = stride,
        "Decoded PNG"
    );

    Ok(DecodedImage {
        buffer,
        source_color,
        source_depth,
    })
}
