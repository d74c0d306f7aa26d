//! Region copy and fill
//!
//! Simple source-copy raster operations. Pixels are replaced, never
//! blended: a transparent source pixel overwrites whatever is below it.

use super::{Pix, PixMut};
use crate::error::{Error, Result};

impl PixMut {
    /// Copy all of `src` into this image with its top-left corner at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `src` does not fit entirely
    /// inside the destination at that offset.
    pub fn paste(&mut self, src: &Pix, x: u32, y: u32) -> Result<()> {
        let fits_w = x
            .checked_add(src.width())
            .is_some_and(|right| right <= self.width());
        let fits_h = y
            .checked_add(src.height())
            .is_some_and(|bottom| bottom <= self.height());
        if !fits_w || !fits_h {
            return Err(Error::DimensionMismatch {
                expected: (
                    self.width().saturating_sub(x),
                    self.height().saturating_sub(y),
                ),
                actual: src.dimensions(),
            });
        }

        let start = x as usize;
        let end = start + src.width() as usize;
        for sy in 0..src.height() {
            self.row_data_mut(y + sy)[start..end].copy_from_slice(src.row_data(sy));
        }
        Ok(())
    }

    /// Fill the rectangle `(x, y, w, h)`, clipped to the image, with `val`.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, val: u32) {
        let x_end = x.saturating_add(w).min(self.width());
        let y_end = y.saturating_add(h).min(self.height());
        if x >= x_end || y >= y_end {
            return;
        }
        for row in y..y_end {
            self.row_data_mut(row)[x as usize..x_end as usize].fill(val);
        }
    }
}
