//! 9-patch border strips
//!
//! A strip is the 1-pixel-thick run of marker pixels along one edge of a
//! 9-patch source, excluding the corner pixels. Strips are validated,
//! resized independently of the interior and pasted back on composition.

use crate::{TransformError, TransformResult, resize};
use resizer_core::{Pix, PixMut, color};
use std::fmt;

/// Edge of a 9-patch image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    /// All edges in validation order.
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    /// Whether the strip for this edge runs vertically (1 x n).
    pub fn is_vertical(self) -> bool {
        matches!(self, Edge::Left | Edge::Right)
    }

    /// Strip dimensions for an interior of `width x height`.
    pub fn strip_dimensions(self, width: u32, height: u32) -> (u32, u32) {
        if self.is_vertical() {
            (1, height)
        } else {
            (width, 1)
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Edge::Left => "left",
            Edge::Right => "right",
            Edge::Top => "top",
            Edge::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

/// Copy one border strip out of an untrimmed 9-patch source.
///
/// # Errors
///
/// Returns [`TransformError::TooSmall`] if the source is smaller than 3x3.
pub fn extract_border(source: &Pix, edge: Edge) -> TransformResult<Pix> {
    let (w, h) = source.dimensions();
    if w < 3 || h < 3 {
        return Err(TransformError::TooSmall {
            width: w,
            height: h,
        });
    }
    let strip = match edge {
        Edge::Left => source.clip_rectangle(0, 1, 1, h - 2)?,
        Edge::Right => source.clip_rectangle(w - 1, 1, 1, h - 2)?,
        Edge::Top => source.clip_rectangle(1, 0, w - 2, 1)?,
        Edge::Bottom => source.clip_rectangle(1, h - 1, w - 2, 1)?,
    };
    Ok(strip)
}

/// Check that every visible pixel of a strip is a marker color.
///
/// Fully transparent pixels are ignored, so an empty strip is valid.
///
/// # Errors
///
/// Returns [`TransformError::MalformedNinePatch`] naming the first offending
/// pixel, counted from the start of the strip.
pub fn verify_border(strip: &Pix, edge: Edge) -> TransformResult<()> {
    match strip
        .data()
        .iter()
        .enumerate()
        .find(|&(_, &p)| color::is_visible(p) && !color::is_marker(p))
    {
        Some((i, &p)) => Err(TransformError::MalformedNinePatch {
            edge,
            position: i as u32,
            color: p,
        }),
        None => Ok(()),
    }
}

/// Resize a border strip to `target_w x target_h`.
///
/// Growing strips are resampled and then snapped back to pure markers with
/// [`enforce_border_colors`]. Shrinking (or same-size) strips never blend:
/// each visible pixel at `p` is copied with its exact color to
/// `min(round(p * max(t-1, 1) / max(s-1, 1)), t-1)` in a transparent
/// buffer, later pixels overwriting earlier ones.
pub fn resize_border(strip: &Pix, target_w: u32, target_h: u32) -> TransformResult<Pix> {
    let tw = target_w.max(1);
    let th = target_h.max(1);
    let (w, h) = strip.dimensions();

    if tw > w || th > h {
        let mut grown = resize(strip, tw, th)?.into_mut();
        enforce_border_colors(&mut grown);
        return Ok(grown.into());
    }

    let ratio = |t: u32, s: u32| {
        t.saturating_sub(1).max(1) as f32 / s.saturating_sub(1).max(1) as f32
    };
    let x_ratio = ratio(tw, w);
    let y_ratio = ratio(th, h);

    let mut out = PixMut::new(tw, th)?;
    for y in 0..h {
        for x in 0..w {
            let p = strip.get_pixel_unchecked(x, y);
            if !color::is_visible(p) {
                continue;
            }
            let nx = ((x as f32 * x_ratio).round() as u32).min(tw - 1);
            let ny = ((y as f32 * y_ratio).round() as u32).min(th - 1);
            out.set_pixel_unchecked(nx, ny, p);
        }
    }
    Ok(out.into())
}

/// Snap a resampled strip back to pure stretch markers.
///
/// Clears the 1-pixel-inset interior (when both dimensions exceed 2),
/// turns every pixel with any coverage into [`color::STRETCH_MARKER`] and
/// finally clears the four corner pixels of the buffer.
pub fn enforce_border_colors(pix: &mut PixMut) {
    let (w, h) = (pix.width(), pix.height());
    if w > 2 && h > 2 {
        pix.fill_rect(1, 1, w - 2, h - 2, color::TRANSPARENT);
    }
    for p in pix.data_mut() {
        if color::is_visible(*p) {
            *p = color::STRETCH_MARKER;
        }
    }
    pix.set_corners(color::TRANSPARENT);
}
