//! Border operations for images
//!
//! This module provides functions for adding and removing borders
//! (padding) around images, and for touching the corner pixels that
//! a 9-patch ring leaves unused.

use super::{Pix, PixMut};
use crate::error::{Error, Result};

impl Pix {
    /// Add a general border with different sizes per side.
    ///
    /// # Returns
    ///
    /// New image with dimensions `(width + left + right, height + top + bot)`,
    /// the border filled with `val` and the source copied at `(left, top)`.
    ///
    /// # Errors
    ///
    /// Returns error if dimensions would overflow.
    pub fn add_border_general(
        &self,
        left: u32,
        right: u32,
        top: u32,
        bot: u32,
        val: u32,
    ) -> Result<Pix> {
        let overflow = || Error::InvalidParameter("border makes image too large".to_string());
        let wd = self
            .width()
            .checked_add(left)
            .and_then(|w| w.checked_add(right))
            .ok_or_else(overflow)?;
        let hd = self
            .height()
            .checked_add(top)
            .and_then(|h| h.checked_add(bot))
            .ok_or_else(overflow)?;

        let mut pixd = PixMut::new(wd, hd)?;
        pixd.set_all(val);
        pixd.paste(self, left, top)?;
        Ok(pixd.into())
    }

    /// Remove a uniform border from the image.
    ///
    /// # Returns
    ///
    /// New image with dimensions `(width - 2*npix, height - 2*npix)`.
    ///
    /// # Errors
    ///
    /// Returns error if nothing would remain after removal.
    pub fn remove_border(&self, npix: u32) -> Result<Pix> {
        self.remove_border_general(npix, npix, npix, npix)
    }

    /// Remove a general border with different sizes per side.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the border is as large as the image.
    pub fn remove_border_general(&self, left: u32, right: u32, top: u32, bot: u32) -> Result<Pix> {
        let w = self.width();
        let h = self.height();
        let wd = w.saturating_sub(left.saturating_add(right));
        let hd = h.saturating_sub(top.saturating_add(bot));
        if wd == 0 || hd == 0 {
            return Err(Error::InvalidDimension {
                width: wd,
                height: hd,
            });
        }
        self.clip_rectangle(left, top, wd, hd)
    }
}

impl PixMut {
    /// Set the four corner pixels to `val`.
    pub fn set_corners(&mut self, val: u32) {
        let xmax = self.width() - 1;
        let ymax = self.height() - 1;
        for (x, y) in [(0, 0), (xmax, 0), (0, ymax), (xmax, ymax)] {
            self.set_pixel_unchecked(x, y, val);
        }
    }
}
