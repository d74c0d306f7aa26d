//! Android 9-patch processing
//!
//! A 9-patch source is an ordinary image with a 1-pixel ring whose pixels
//! are either transparent or one of two markers: black for stretchable
//! regions, red for padding (layout bounds). Resizing such an image as a
//! whole would blend the markers into the content and into each other, so
//! the ring is taken apart first:
//!
//! ```text
//!   +---------top---------+
//!   |                     |
//! left     interior     right
//!   |                     |
//!   +--------bottom-------+
//! ```
//!
//! The interior goes through the regular resampler; each strip is resized
//! on its own (see [`resize_border`]) and everything is pasted back into a
//! buffer two pixels larger than the target interior. Corners stay
//! transparent.

mod border;

pub use border::{Edge, enforce_border_colors, extract_border, resize_border, verify_border};

use crate::{TransformError, TransformResult, resize};
use resizer_core::{Pix, PixMut};

/// A 9-patch image split into its interior and four validated strips.
#[derive(Debug, Clone)]
pub struct NinePatch {
    interior: Pix,
    left: Pix,
    right: Pix,
    top: Pix,
    bottom: Pix,
}

impl NinePatch {
    /// Split an untrimmed 9-patch source.
    ///
    /// Strips are verified in the order left, right, top, bottom.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::TooSmall`] for sources under 3x3 and
    /// [`TransformError::MalformedNinePatch`] for the first border pixel
    /// that is visible but not a marker.
    pub fn decompose(source: &Pix) -> TransformResult<Self> {
        let (w, h) = source.dimensions();
        if w < 3 || h < 3 {
            return Err(TransformError::TooSmall {
                width: w,
                height: h,
            });
        }

        let interior = source.remove_border(1)?;
        let left = extract_border(source, Edge::Left)?;
        let right = extract_border(source, Edge::Right)?;
        let top = extract_border(source, Edge::Top)?;
        let bottom = extract_border(source, Edge::Bottom)?;

        let patch = Self {
            interior,
            left,
            right,
            top,
            bottom,
        };
        for edge in Edge::ALL {
            verify_border(patch.border(edge), edge)?;
        }
        Ok(patch)
    }

    /// The trimmed content image.
    pub fn interior(&self) -> &Pix {
        &self.interior
    }

    /// Size of the trimmed content image.
    pub fn content_dimensions(&self) -> (u32, u32) {
        self.interior.dimensions()
    }

    /// The strip taken from `edge`.
    pub fn border(&self, edge: Edge) -> &Pix {
        match edge {
            Edge::Left => &self.left,
            Edge::Right => &self.right,
            Edge::Top => &self.top,
            Edge::Bottom => &self.bottom,
        }
    }

    /// Resize the interior to `target_w x target_h` and every strip to match.
    pub fn resize(&self, target_w: u32, target_h: u32) -> TransformResult<NinePatch> {
        let tw = target_w.max(1);
        let th = target_h.max(1);
        let strip = |edge: Edge| {
            let (sw, sh) = edge.strip_dimensions(tw, th);
            resize_border(self.border(edge), sw, sh)
        };

        Ok(NinePatch {
            interior: resize(&self.interior, tw, th)?,
            left: strip(Edge::Left)?,
            right: strip(Edge::Right)?,
            top: strip(Edge::Top)?,
            bottom: strip(Edge::Bottom)?,
        })
    }

    /// Reassemble the `(w+2) x (h+2)` 9-patch image.
    pub fn compose(&self) -> TransformResult<Pix> {
        let (w, h) = self.interior.dimensions();
        let mut out = PixMut::new(w + 2, h + 2)?;
        out.paste(&self.interior, 1, 1)?;
        out.paste(&self.left, 0, 1)?;
        out.paste(&self.right, w + 1, 1)?;
        out.paste(&self.top, 1, 0)?;
        out.paste(&self.bottom, 1, h + 1)?;
        Ok(out.into())
    }
}

/// Resize a 9-patch source so that its interior becomes `target_w x target_h`.
///
/// The returned image is `(target_w + 2) x (target_h + 2)`.
///
/// # Errors
///
/// See [`NinePatch::decompose`].
pub fn process_nine_patch(source: &Pix, target_w: u32, target_h: u32) -> TransformResult<Pix> {
    let patch = NinePatch::decompose(source)?;
    log::debug!(
        "9-patch {:?} -> interior {}x{}",
        patch.content_dimensions(),
        target_w,
        target_h
    );
    patch.resize(target_w, target_h)?.compose()
}
