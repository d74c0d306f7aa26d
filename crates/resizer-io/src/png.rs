//! PNG image format support
//!
//! Every decoded PNG is expanded to 8-bit ARGB regardless of its stored
//! color type (gray, gray+alpha, RGB, RGBA, palette with optional tRNS,
//! 1/2/4/16-bit samples). Encoding always produces 8-bit RGBA so that
//! 9-patch marker pixels and transparency survive untouched.

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use resizer_core::{Pix, PixMut, color};
use std::io::{BufRead, Seek, Write};

/// PNG file signature
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG sample depth after expansion: {:?}",
            bit_depth
        )));
    }
    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "palette was not expanded".to_string(),
            ));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut pix_mut = PixMut::new(width, height)?;
    for y in 0..height {
        let row = &data[y as usize * bytes_per_row..];
        let out = pix_mut.row_data_mut(y);
        for (x, px) in out.iter_mut().enumerate() {
            let s = &row[x * samples..x * samples + samples];
            *px = match samples {
                1 => color::compose_rgb(s[0], s[0], s[0]),
                2 => color::compose_argb(s[1], s[0], s[0], s[0]),
                3 => color::compose_rgb(s[0], s[1], s[2]),
                _ => color::compose_argb(s[3], s[0], s[1], s[2]),
            };
        }
    }

    Ok(pix_mut.into())
}

/// Write a PNG image as 8-bit RGBA
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let width = pix.width();
    let height = pix.height();

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = Vec::with_capacity(pix.data().len() * 4);
    for &pixel in pix.data() {
        let (a, r, g, b) = color::extract_argb(pixel);
        data.extend_from_slice(&[r, g, b, a]);
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
