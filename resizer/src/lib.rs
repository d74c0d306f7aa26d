//! Resizer - Density-bucket asset generation for Android and iOS
//!
//! Turns one source PNG (or Android 9-patch) into every density variant an
//! app needs, plus iOS asset-catalog image sets.
//!
//! # Example
//!
//! ```
//! use resizer::{DensityCatalog, Pix, transform};
//!
//! let pix = Pix::new(64, 64).unwrap();
//! let half = transform::resize(&pix, 32, 32).unwrap();
//! assert_eq!(half.dimensions(), (32, 32));
//! assert_eq!(DensityCatalog::standard().active().count(), 8);
//! ```

pub mod config;

// Re-export core types (primary data structures used everywhere)
pub use resizer_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use resizer_assets as assets;
pub use resizer_io as io;
pub use resizer_transform as transform;

pub use config::{ConfigError, ResizerConfig};
pub use resizer_assets::{
    AssetError, AssetPipeline, DensityCatalog, FsSink, Job, JobEvent, JobReport, JobStatus,
};
