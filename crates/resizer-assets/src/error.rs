//! Error types for resizer-assets

use resizer_io::IoError;
use resizer_transform::TransformError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can end an asset job
#[derive(Debug, Error)]
pub enum AssetError {
    /// Source could not be read or is not a PNG
    #[error("cannot decode '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    /// Source file name yields an empty base name
    #[error("invalid source name '{0}'")]
    InvalidName(String),

    /// Declared source density is not a positive number
    #[error("invalid source density {0}")]
    InvalidDensity(f64),

    /// 9-patch border is malformed or missing
    #[error("wrong 9-patch: {0}")]
    MalformedNinePatch(#[source] TransformError),

    /// Any other transform failure
    #[error("transform failed: {0}")]
    Transform(#[source] TransformError),

    /// Output image could not be encoded
    #[error("cannot encode output: {0}")]
    Encode(#[source] IoError),

    /// Output file or directory could not be written
    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Asset-catalog manifest could not be produced or written
    #[error("cannot write manifest '{}': {message}", .path.display())]
    ManifestWrite { path: PathBuf, message: String },

    /// Catalog override names a bucket that does not exist
    #[error("unknown density bucket '{0}'")]
    UnknownBucket(String),
}

impl AssetError {
    /// Short status text shown for a failed job.
    pub fn reason(&self) -> &'static str {
        match self {
            AssetError::Decode { .. } => "wrong source image",
            AssetError::InvalidName(_) => "invalid source name",
            AssetError::InvalidDensity(_) => "invalid source density",
            AssetError::MalformedNinePatch(_) => "wrong 9-patch",
            AssetError::Transform(_) => "transform failure",
            AssetError::Encode(_) | AssetError::Write { .. } => "write failure",
            AssetError::ManifestWrite { .. } => "manifest write failure",
            AssetError::UnknownBucket(_) => "unknown density bucket",
        }
    }
}

impl From<TransformError> for AssetError {
    fn from(err: TransformError) -> Self {
        match err {
            TransformError::MalformedNinePatch { .. } | TransformError::TooSmall { .. } => {
                AssetError::MalformedNinePatch(err)
            }
            other => AssetError::Transform(other),
        }
    }
}

/// Result type for asset operations
pub type AssetResult<T> = Result<T, AssetError>;
