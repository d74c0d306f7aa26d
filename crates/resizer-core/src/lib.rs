//! Resizer Core - Basic data structures for asset resizing
//!
//! This crate provides the fundamental pixel container used throughout
//! the resizer workspace:
//!
//! - [`Pix`] / [`PixMut`] - 32-bit ARGB image container (immutable / mutable)
//! - [`color`] - Channel helpers and the two 9-patch marker colors
//!
//! Every transform in the workspace works on straight (non-premultiplied)
//! ARGB pixels. Premultiplication only happens transiently inside the
//! resampler.

pub mod error;
pub mod pix;

pub use error::{Error, Result};
pub use pix::{Pix, PixMut};

/// Color channel helpers for 32-bit ARGB pixels.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xAARRGGBB` (alpha in MSB, blue in LSB),
/// with straight alpha.
pub mod color {
    /// Shift amounts for extracting color channels
    pub const ALPHA_SHIFT: u32 = 24;
    pub const RED_SHIFT: u32 = 16;
    pub const GREEN_SHIFT: u32 = 8;
    pub const BLUE_SHIFT: u32 = 0;

    /// Mask selecting the alpha channel.
    pub const ALPHA_MASK: u32 = 0xff00_0000;

    /// Fully transparent pixel.
    pub const TRANSPARENT: u32 = 0x0000_0000;

    /// 9-patch stretch marker (opaque pure black).
    pub const STRETCH_MARKER: u32 = 0xff00_0000;

    /// 9-patch padding marker (opaque pure red).
    pub const PADDING_MARKER: u32 = 0xffff_0000;

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Whether the pixel has any coverage at all.
    #[inline]
    pub fn is_visible(pixel: u32) -> bool {
        pixel & ALPHA_MASK != 0
    }

    /// Compose an opaque 32-bit pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_argb(255, r, g, b)
    }

    /// Compose a 32-bit ARGB pixel.
    #[inline]
    pub fn compose_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
        ((a as u32) << ALPHA_SHIFT)
            | ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
    }

    /// Extract ARGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_argb(pixel: u32) -> (u8, u8, u8, u8) {
        (alpha(pixel), red(pixel), green(pixel), blue(pixel))
    }

    /// Whether the pixel is one of the two colors a 9-patch border may carry.
    #[inline]
    pub fn is_marker(pixel: u32) -> bool {
        pixel == STRETCH_MARKER || pixel == PADDING_MARKER
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_compose_extract_roundtrip() {
            let p = compose_argb(0x80, 0x11, 0x22, 0x33);
            assert_eq!(p, 0x8011_2233);
            assert_eq!(extract_argb(p), (0x80, 0x11, 0x22, 0x33));
        }

        #[test]
        fn test_markers() {
            assert_eq!(compose_rgb(0, 0, 0), STRETCH_MARKER);
            assert_eq!(compose_rgb(255, 0, 0), PADDING_MARKER);
            assert!(is_marker(STRETCH_MARKER));
            assert!(is_marker(PADDING_MARKER));
            assert!(!is_marker(compose_rgb(0, 0, 255)));
            // Semi-transparent black is not a marker
            assert!(!is_marker(compose_argb(0x7f, 0, 0, 0)));
        }

        #[test]
        fn test_visibility() {
            assert!(!is_visible(TRANSPARENT));
            // Color bits without alpha carry no coverage
            assert!(!is_visible(0x00ff_ffff));
            assert!(is_visible(compose_argb(1, 0, 0, 0)));
        }
    }
}
