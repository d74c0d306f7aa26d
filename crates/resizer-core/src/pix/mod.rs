//! PIX - The main image container
//!
//! The `Pix` structure is the single image type of the resizer. Unlike a
//! general-purpose imaging library it only knows one layout: 32-bit ARGB,
//! straight alpha, one `u32` per pixel, rows stored top to bottom with no
//! padding (`data.len() == width * height`).
//!
//! # Ownership model
//!
//! `Pix` uses `Arc` for cheap cloning (shared ownership).
//! To modify pixel data, convert to `PixMut` via [`Pix::try_into_mut`]
//! or [`Pix::to_mut`], then convert back with `Into<Pix>`.

mod access;
mod border;
mod clip;
mod rop;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Largest pixel count a new image may allocate (1 GiB of ARGB data).
pub const MAX_PIXELS: u64 = 1 << 28;

/// Internal PIX data
#[derive(Debug, PartialEq, Eq)]
struct PixData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Row-major ARGB pixels
    data: Vec<u32>,
}

impl PixData {
    fn zeroed(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 || width as u64 * height as u64 > MAX_PIXELS {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(PixData {
            width,
            height,
            data: vec![0u32; width as usize * height as usize],
        })
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// PIX - Main image container
///
/// # Examples
///
/// ```
/// use resizer_core::Pix;
///
/// let pix = Pix::new(64, 48).unwrap();
/// assert_eq!(pix.width(), 64);
/// assert_eq!(pix.height(), 48);
/// assert_eq!(pix.get_pixel(0, 0), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create a new, fully transparent PIX.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or if
    /// the image would exceed [`MAX_PIXELS`].
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Pix {
            inner: Arc::new(PixData::zeroed(width, height)?),
        })
    }

    /// Wrap an existing row-major ARGB buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::DataLength`] if `data.len() != width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if data.len() != width as usize * height as usize {
            return Err(Error::DataLength {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Pix {
            inner: Arc::new(PixData {
                width,
                height,
                data,
            }),
        })
    }

    /// Create a PIX where every pixel has the same value.
    pub fn filled(width: u32, height: u32, val: u32) -> Result<Self> {
        let mut pm = PixMut::new(width, height)?;
        pm.set_all(val);
        Ok(pm.into())
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the pixels of one row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = self.inner.index(0, y);
        &self.inner.data[start..start + self.inner.width as usize]
    }

    /// Get the number of strong references to this PIX.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check if two PIX have the same width and height.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Check whether two PIX hold exactly the same pixels.
    pub fn equals(&self, other: &Pix) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner == other.inner
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixMut { inner: data }),
            Err(arc) => Err(Pix { inner: arc }),
        }
    }

    /// Create a mutable copy of this PIX.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: PixData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }

    /// Take mutable ownership, copying only if the data is shared.
    pub fn into_mut(self) -> PixMut {
        match self.try_into_mut() {
            Ok(pm) => pm,
            Err(shared) => shared.to_mut(),
        }
    }
}

/// Mutable PIX
///
/// Allows modification of image data. Convert back to an immutable
/// [`Pix`] using `Into<Pix>`.
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Create a new, fully transparent mutable PIX.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or if
    /// the image would exceed [`MAX_PIXELS`].
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(PixMut {
            inner: PixData::zeroed(width, height)?,
        })
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the image data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get mutable access to a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let start = self.inner.index(0, y);
        let end = start + self.inner.width as usize;
        &mut self.inner.data[start..end]
    }

    /// Set every pixel to `val`.
    pub fn set_all(&mut self, val: u32) {
        self.inner.data.fill(val);
    }
}

impl From<PixMut> for Pix {
    fn from(pm: PixMut) -> Self {
        Pix {
            inner: Arc::new(pm.inner),
        }
    }
}
