//! resizer-assets - Density-bucket asset generation
//!
//! This crate turns one source PNG into the full set of Android and iOS
//! density variants:
//!
//! - [`catalog`] - The ordered table of density buckets
//! - [`naming`] - Resource names and output file names
//! - [`job`] - Jobs, their status and status events
//! - [`pipeline`] - Running a job against a catalog
//! - [`manifest`] - iOS asset-catalog `Contents.json`
//! - [`layout`] / [`sink`] - Where outputs go and how they are written
//!
//! # Example
//!
//! ```no_run
//! use resizer_assets::{AssetPipeline, DensityCatalog, FsSink, Job};
//!
//! let catalog = DensityCatalog::standard();
//! let sink = FsSink::new();
//! let pipeline = AssetPipeline::new(&catalog, &sink);
//!
//! let mut job = Job::new("art/icon.png", 4.0).with_manifest(true);
//! let report = pipeline.run(&mut job, |event| println!("{}", event.status))?;
//! println!("{} files", report.outputs.len());
//! # Ok::<(), resizer_assets::AssetError>(())
//! ```

pub mod catalog;
mod error;
pub mod job;
pub mod layout;
pub mod manifest;
pub mod naming;
pub mod pipeline;
pub mod sink;

pub use catalog::{DensityCatalog, Platform, ScaleTarget};
pub use error::{AssetError, AssetResult};
pub use job::{Job, JobEvent, JobStatus};
pub use layout::OutputLayout;
pub use manifest::{AssetCatalogManifest, ManifestBuilder, ManifestEntry};
pub use naming::{SourceMode, base_name};
pub use pipeline::{AssetPipeline, JobReport};
pub use sink::{FsSink, MemorySink, OutputSink};
