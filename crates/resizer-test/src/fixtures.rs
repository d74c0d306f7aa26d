//! Synthetic test images
//!
//! The regression tests build their inputs in memory instead of shipping
//! binary PNGs. [`NinePatchBuilder`] produces 9-patch sources with markers
//! placed at interior-relative offsets, which is how the expectations in
//! the tests are phrased.

use crate::error::{TestError, TestResult};
use resizer_core::{Pix, PixMut, color};
use std::path::{Path, PathBuf};

/// Opaque image whose red channel ramps with x and green with y.
pub fn gradient(width: u32, height: u32) -> Pix {
    let mut pm = match PixMut::new(width.max(1), height.max(1)) {
        Ok(pm) => pm,
        Err(e) => panic!("gradient fixture: {e}"),
    };
    let (w, h) = (pm.width(), pm.height());
    for y in 0..h {
        for x in 0..w {
            let r = (x * 255 / w.max(2).saturating_sub(1)).min(255) as u8;
            let g = (y * 255 / h.max(2).saturating_sub(1)).min(255) as u8;
            pm.set_pixel_unchecked(x, y, color::compose_rgb(r, g, 0x80));
        }
    }
    pm.into()
}

/// Image with every pixel set to `val`.
pub fn solid(width: u32, height: u32, val: u32) -> Pix {
    match Pix::filled(width, height, val) {
        Ok(pix) => pix,
        Err(e) => panic!("solid fixture: {e}"),
    }
}

/// Border edge addressed by [`NinePatchBuilder::marker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

/// Builder for 9-patch source images.
///
/// Positions are interior-relative: position 0 on the left edge is source
/// row 1, position 0 on the top edge is source column 1.
pub struct NinePatchBuilder {
    interior: Pix,
    markers: Vec<(Side, u32, u32)>,
}

impl NinePatchBuilder {
    /// Start from an interior image.
    pub fn new(interior: Pix) -> Self {
        Self {
            interior,
            markers: Vec::new(),
        }
    }

    /// Start from a gradient interior of the given size.
    pub fn with_gradient(width: u32, height: u32) -> Self {
        Self::new(gradient(width, height))
    }

    /// Place an arbitrary color on a border edge.
    pub fn marker(mut self, side: Side, pos: u32, val: u32) -> Self {
        self.markers.push((side, pos, val));
        self
    }

    /// Place stretch markers on a half-open interior range.
    pub fn stretch(mut self, side: Side, range: std::ops::Range<u32>) -> Self {
        for pos in range {
            self.markers.push((side, pos, color::STRETCH_MARKER));
        }
        self
    }

    /// Place padding markers on a half-open interior range.
    pub fn padding(mut self, side: Side, range: std::ops::Range<u32>) -> Self {
        for pos in range {
            self.markers.push((side, pos, color::PADDING_MARKER));
        }
        self
    }

    /// Assemble the `(w+2) x (h+2)` source image.
    pub fn build(self) -> TestResult<Pix> {
        let (iw, ih) = self.interior.dimensions();
        let bordered = self
            .interior
            .add_border_general(1, 1, 1, 1, color::TRANSPARENT)
            .map_err(|e| TestError::Fixture(e.to_string()))?;
        let mut pm = bordered.into_mut();
        for (side, pos, val) in self.markers {
            let limit = match side {
                Side::Left | Side::Right => ih,
                Side::Top | Side::Bottom => iw,
            };
            if pos >= limit {
                return Err(TestError::Fixture(format!(
                    "{:?} marker at {} outside edge of length {}",
                    side, pos, limit
                )));
            }
            let (x, y) = match side {
                Side::Left => (0, pos + 1),
                Side::Right => (iw + 1, pos + 1),
                Side::Top => (pos + 1, 0),
                Side::Bottom => (pos + 1, ih + 1),
            };
            pm.set_pixel_unchecked(x, y, val);
        }
        Ok(pm.into())
    }
}

/// Encode `pix` as PNG into `dir/name` and return the path.
pub fn write_fixture_png(dir: &Path, name: &str, pix: &Pix) -> TestResult<PathBuf> {
    let path = dir.join(name);
    resizer_io::write_image(pix, &path).map_err(|e| TestError::ImageWrite {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nine_patch_builder_places_markers() {
        let pix = NinePatchBuilder::with_gradient(4, 3)
            .stretch(Side::Left, 1..2)
            .padding(Side::Bottom, 0..4)
            .build()
            .unwrap();
        assert_eq!(pix.dimensions(), (6, 5));
        assert_eq!(pix.get_pixel(0, 2), Some(color::STRETCH_MARKER));
        assert_eq!(pix.get_pixel(1, 4), Some(color::PADDING_MARKER));
        assert_eq!(pix.get_pixel(4, 4), Some(color::PADDING_MARKER));
        // Corners stay transparent
        assert_eq!(pix.get_pixel(0, 0), Some(color::TRANSPARENT));
        assert_eq!(pix.get_pixel(5, 4), Some(color::TRANSPARENT));
    }

    #[test]
    fn test_nine_patch_builder_rejects_out_of_range() {
        let result = NinePatchBuilder::with_gradient(2, 2)
            .stretch(Side::Top, 0..3)
            .build();
        assert!(matches!(result, Err(TestError::Fixture(_))));
    }

    #[test]
    fn test_gradient_is_opaque() {
        let pix = gradient(5, 5);
        assert!(pix.data().iter().all(|&p| color::alpha(p) == 255));
        assert_ne!(pix.get_pixel(0, 0), pix.get_pixel(4, 4));
    }
}
