//! resizer-transform - Pixel transforms for the asset resizer
//!
//! This crate provides the two pure transforms the asset pipeline is
//! built on:
//!
//! - [`scale`] - Quality resampling (progressive halving + bilinear)
//! - [`ninepatch`] - Android 9-patch decomposition, validation, rescaling
//!   and recomposition
//!
//! Neither module performs I/O.

mod error;
pub mod ninepatch;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use ninepatch::{
    Edge, NinePatch, enforce_border_colors, extract_border, process_nine_patch, resize_border,
    verify_border,
};
pub use scale::{resize, scaled_dimensions};
