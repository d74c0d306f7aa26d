//! resizer-io - Image I/O for the asset resizer
//!
//! Only PNG is supported, on both sides. Files are read whole and decoded
//! from memory; encoding goes to any `Write` or into a `Vec<u8>` so that
//! callers can place the bytes atomically.

mod error;
pub mod png;

pub use error::{IoError, IoResult};
pub use png::{read_png, write_png};

use resizer_core::Pix;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Check whether a byte stream starts with the PNG signature.
pub fn is_png(data: &[u8]) -> bool {
    data.starts_with(&png::PNG_SIGNATURE)
}

/// Decode an image held in memory.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] if the data is not PNG, or
/// [`IoError::DecodeError`] if the PNG stream is corrupt.
pub fn read_image_mem(data: &[u8]) -> IoResult<Pix> {
    if !is_png(data) {
        return Err(IoError::UnsupportedFormat(
            "missing PNG signature".to_string(),
        ));
    }
    read_png(Cursor::new(data))
}

/// Read an image from a file path.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let data = fs::read(path)?;
    read_image_mem(&data)
}

/// Encode an image to PNG bytes.
pub fn write_image_mem(pix: &Pix) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_png(pix, &mut buffer)?;
    Ok(buffer)
}

/// Write an image to a file path as PNG.
///
/// The file is encoded in memory first and written with a single call.
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P) -> IoResult<()> {
    let data = write_image_mem(pix)?;
    fs::write(path, data)?;
    Ok(())
}
