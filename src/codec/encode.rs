//! PNG encoding of dithered sample buffers.

use std::io::Cursor;

use mono_dither::SampleBuffer;

use crate::error::CodecError;

/// Pixel format written to the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// 8 bits per channel, same channel layout as the buffer.
    #[default]
    EightBit,
    /// 1-bit grayscale. Only available for buffers without alpha.
    OneBit,
}

/// Encode a sample buffer as PNG.
///
/// The color type follows the channel stride: 1 gray, 2 gray+alpha, and 3/4
/// RGB/RGBA for buffers passed through without dithering.
/// [`OutputFormat::OneBit`] falls back to 8-bit when the buffer has alpha.
pub fn encode_png(buffer: &SampleBuffer, format: OutputFormat) -> Result<Vec<u8>, CodecError> {
    let color_type = match buffer.channel_stride() {
        1 => png::ColorType::Grayscale,
        2 => png::ColorType::GrayscaleAlpha,
        3 => png::ColorType::Rgb,
        4 => png::ColorType::Rgba,
        other => return Err(CodecError::UnsupportedChannels(other)),
    };

    let (bit_depth, packed) = match format {
        OutputFormat::OneBit if color_type == png::ColorType::Grayscale => (
            png::BitDepth::One,
            pack_bits(buffer.as_raw(), buffer.width()),
        ),
        OutputFormat::OneBit => {
            tracing::warn!(
                channels = buffer.channel_stride(),
                "1-bit output needs a single-channel image, writing 8-bit"
            );
            (png::BitDepth::Eight, buffer.as_raw().to_vec())
        }
        OutputFormat::EightBit => (png::BitDepth::Eight, buffer.as_raw().to_vec()),
    };

    let (width, height) = dimensions(buffer)?;
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(bit_depth);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&packed)?;
    }
    Ok(buf.into_inner())
}

/// Re-compress PNG bytes with oxipng, keeping the input on failure.
pub fn optimize_png(png_bytes: Vec<u8>) -> Vec<u8> {
    match oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) => {
            tracing::debug!(
                before = png_bytes.len(),
                after = optimized.len(),
                "Optimized PNG"
            );
            optimized
        }
        Err(e) => {
            tracing::warn!(%e, "PNG optimization failed, keeping unoptimized output");
            png_bytes
        }
    }
}

fn dimensions(buffer: &SampleBuffer) -> Result<(u32, u32), CodecError> {
    let unsupported = || CodecError::UnsupportedDimensions {
        width: buffer.width(),
        height: buffer.height(),
    };
    let width = u32::try_from(buffer.width()).map_err(|_| unsupported())?;
    let height = u32::try_from(buffer.height()).map_err(|_| unsupported())?;
    Ok((width, height))
}

/// Pack luminance into 1-bit PNG rows, MSB first; samples above 127 are white.
fn pack_bits(luma: &[u8], width: usize) -> Vec<u8> {
    let bytes_per_row = width.div_ceil(8);
    let height = luma.len() / width;
    let mut packed = Vec::with_capacity(bytes_per_row * height);

    for row in luma.chunks(width) {
        let mut byte = 0u8;
        for (i, &value) in row.iter().enumerate() {
            if value > 127 {
                byte |= 0x80 >> (i % 8);
            }
            if i % 8 == 7 || i == row.len() - 1 {
                packed.push(byte);
                byte = 0;
            }
        }
    }

    packed
}
