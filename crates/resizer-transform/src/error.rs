//! Error types for resizer-transform

use crate::ninepatch::Edge;
use thiserror::Error;

/// Errors that can occur during pixel transforms
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] resizer_core::Error),

    /// A border strip carries a color other than the two markers
    #[error("malformed 9-patch: {edge} border has color {color:#010x} at offset {position}")]
    MalformedNinePatch { edge: Edge, position: u32, color: u32 },

    /// Image too small to carry a 9-patch border
    #[error("image {width}x{height} is too small for a 9-patch border")]
    TooSmall { width: u32, height: u32 },
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
