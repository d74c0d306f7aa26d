//! Rectangle clipping

use super::{Pix, PixMut};
use crate::error::{Error, Result};

impl Pix {
    /// Extract a rectangular sub-region as a new image.
    ///
    /// The requested rectangle is clipped to the image bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if:
    /// - `w` or `h` is zero
    /// - The rectangle origin is outside the image
    ///
    /// # Examples
    ///
    /// ```
    /// use resizer_core::Pix;
    ///
    /// let pix = Pix::new(100, 80).unwrap();
    /// let clipped = pix.clip_rectangle(80, 60, 50, 50).unwrap();
    /// assert_eq!(clipped.width(), 20);   // clipped: 100 - 80
    /// assert_eq!(clipped.height(), 20);  // clipped: 80 - 60
    /// ```
    pub fn clip_rectangle(&self, x: u32, y: u32, w: u32, h: u32) -> Result<Pix> {
        if w == 0 || h == 0 {
            return Err(Error::InvalidParameter(format!(
                "clip rectangle has zero dimension: {}x{}",
                w, h
            )));
        }

        let src_w = self.width();
        let src_h = self.height();
        if x >= src_w || y >= src_h {
            return Err(Error::InvalidParameter(format!(
                "clip rectangle origin ({}, {}) is outside image bounds ({}x{})",
                x, y, src_w, src_h
            )));
        }

        let clip_w = w.min(src_w - x);
        let clip_h = h.min(src_h - y);

        let mut pixd = PixMut::new(clip_w, clip_h)?;
        for dy in 0..clip_h {
            let start = x as usize;
            let src_row = &self.row_data(y + dy)[start..start + clip_w as usize];
            pixd.row_data_mut(dy).copy_from_slice(src_row);
        }

        Ok(pixd.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_column() {
        let pix = Pix::from_data(3, 3, (0..9).collect()).unwrap();
        let col = pix.clip_rectangle(2, 1, 1, 2).unwrap();
        assert_eq!(col.dimensions(), (1, 2));
        assert_eq!(col.data(), &[5, 8]);
    }

    #[test]
    fn test_clip_rejects_outside_origin() {
        let pix = Pix::new(3, 3).unwrap();
        assert!(pix.clip_rectangle(3, 0, 1, 1).is_err());
        assert!(pix.clip_rectangle(0, 0, 0, 1).is_err());
    }
}
