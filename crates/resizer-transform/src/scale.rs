//! Image resampling
//!
//! [`resize`] is the single resampling entry point used for both source
//! images and upscaled 9-patch border strips:
//!
//! - Large reductions are done by repeated halving, so that every bilinear
//!   pass only looks at a 2x2 neighborhood that actually covers its source
//!   footprint
//! - The last pass is a direct bilinear resample to the exact target size
//!
//! Interpolation runs on premultiplied channels so that transparent pixels
//! (whose color bits are meaningless) never bleed into visible ones.

use crate::TransformResult;
use resizer_core::{Pix, PixMut, color};

/// Resize an image to `target_w x target_h`
///
/// Zero targets are clamped to 1. While the target width is less than half
/// the current width (`target_w * 2 < width - 1`) the image is first halved
/// in both directions; the final step is one bilinear resample. Upscales
/// always take the direct path. Resizing to the current size returns the
/// image unchanged.
///
/// # Arguments
/// * `pix` - Input image
/// * `target_w` - Target width
/// * `target_h` - Target height
pub fn resize(pix: &Pix, target_w: u32, target_h: u32) -> TransformResult<Pix> {
    let tw = target_w.max(1);
    let th = target_h.max(1);

    let mut current = pix.clone();
    while tw.saturating_mul(2) < current.width().saturating_sub(1) {
        let (w, h) = current.dimensions();
        let (hw, hh) = ((w / 2).max(1), (h / 2).max(1));
        log::trace!("halving {}x{} -> {}x{}", w, h, hw, hh);
        current = bilinear(&current, hw, hh)?;
    }

    if current.dimensions() == (tw, th) {
        return Ok(current);
    }
    bilinear(&current, tw, th)
}

/// Target dimensions for a scale ratio, rounded and clamped to at least 1.
///
/// # Examples
///
/// ```
/// use resizer_transform::scaled_dimensions;
///
/// assert_eq!(scaled_dimensions(0.75, 10, 3), (8, 2));
/// assert_eq!(scaled_dimensions(0.01, 10, 10), (1, 1));
/// ```
pub fn scaled_dimensions(ratio: f64, width: u32, height: u32) -> (u32, u32) {
    let scale = |v: u32| ((ratio * v as f64).round() as u32).max(1);
    (scale(width), scale(height))
}

/// Source sample position for destination index `d`.
///
/// Returns the two neighboring source indices and the weight of the second.
#[inline]
fn sample_pos(d: u32, src: u32, dst: u32) -> (usize, usize, f32) {
    let max = (src - 1) as f32;
    let s = ((d as f32 + 0.5) * src as f32 / dst as f32 - 0.5).clamp(0.0, max);
    let i0 = s.floor() as u32;
    let i1 = (i0 + 1).min(src - 1);
    (i0 as usize, i1 as usize, s - i0 as f32)
}

/// Single bilinear pass on premultiplied channels.
fn bilinear(pix: &Pix, dw: u32, dh: u32) -> TransformResult<Pix> {
    let (sw, sh) = pix.dimensions();
    let mut out = PixMut::new(dw, dh)?;
    let xs: Vec<_> = (0..dw).map(|x| sample_pos(x, sw, dw)).collect();

    for y in 0..dh {
        let (y0, y1, fy) = sample_pos(y, sh, dh);
        let row0 = pix.row_data(y0 as u32);
        let row1 = pix.row_data(y1 as u32);
        let dst = out.row_data_mut(y);

        for (px, &(x0, x1, fx)) in dst.iter_mut().zip(&xs) {
            let taps = [
                (row0[x0], (1.0 - fx) * (1.0 - fy)),
                (row0[x1], fx * (1.0 - fy)),
                (row1[x0], (1.0 - fx) * fy),
                (row1[x1], fx * fy),
            ];
            let mut acc = [0.0f32; 4];
            for (p, w) in taps {
                if w == 0.0 || !color::is_visible(p) {
                    continue;
                }
                let (a, r, g, b) = color::extract_argb(p);
                let wa = w * a as f32;
                acc[0] += wa;
                acc[1] += wa * r as f32;
                acc[2] += wa * g as f32;
                acc[3] += wa * b as f32;
            }
            *px = unpremultiply(acc);
        }
    }

    Ok(out.into())
}

/// Convert accumulated `[a, a*r, a*g, a*b]` back to a straight ARGB pixel.
#[inline]
fn unpremultiply(acc: [f32; 4]) -> u32 {
    let a = acc[0].round().clamp(0.0, 255.0) as u8;
    if a == 0 {
        return color::TRANSPARENT;
    }
    let channel = |v: f32| (v / acc[0]).round().clamp(0.0, 255.0) as u8;
    color::compose_argb(a, channel(acc[1]), channel(acc[2]), channel(acc[3]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_same_size_is_identity() {
        let pix = Pix::from_data(3, 1, vec![0xff11_2233, 0x0100_0000, 0x80ff_ffff]).unwrap();
        let out = resize(&pix, 3, 1).unwrap();
        assert!(out.equals(&pix));
    }

    #[test]
    fn test_resize_clamps_zero_target() {
        let pix = Pix::filled(8, 8, color::PADDING_MARKER).unwrap();
        let out = resize(&pix, 0, 0).unwrap();
        assert_eq!(out.dimensions(), (1, 1));
        assert_eq!(out.get_pixel(0, 0), Some(color::PADDING_MARKER));
    }

    #[test]
    fn test_halving_terminates() {
        let pix = Pix::filled(1000, 3, 0xff40_8020).unwrap();
        let out = resize(&pix, 1, 1).unwrap();
        assert_eq!(out.dimensions(), (1, 1));
        assert_eq!(out.get_pixel(0, 0), Some(0xff40_8020));
    }

    #[test]
    fn test_solid_stays_solid() {
        let pix = Pix::filled(5, 7, 0xff12_3456).unwrap();
        for (w, h) in [(10, 14), (2, 3), (5, 20)] {
            let out = resize(&pix, w, h).unwrap();
            assert_eq!(out.dimensions(), (w, h));
            assert!(out.data().iter().all(|&p| p == 0xff12_3456));
        }
    }

    #[test]
    fn test_transparent_neighbors_do_not_darken() {
        // Half-transparent red next to fully transparent black
        let pix = Pix::from_data(2, 1, vec![0x80ff_0000, color::TRANSPARENT]).unwrap();
        let out = resize(&pix, 8, 1).unwrap();
        for &p in out.data() {
            if color::is_visible(p) {
                assert_eq!(color::red(p), 255);
                assert_eq!(color::green(p), 0);
            }
        }
        assert_eq!(out.get_pixel(0, 0), Some(0x80ff_0000));
    }

    #[test]
    fn test_scaled_dimensions_rounds() {
        assert_eq!(scaled_dimensions(1.0, 64, 64), (64, 64));
        assert_eq!(scaled_dimensions(2.0, 64, 64), (128, 128));
        assert_eq!(scaled_dimensions(1.5, 5, 3), (8, 5));
        assert_eq!(scaled_dimensions(0.0, 5, 3), (1, 1));
    }
}
