//! Per-job asset generation
//!
//! [`AssetPipeline::run`] drives one [`Job`] from its source file to the
//! full set of bucket outputs:
//!
//! 1. Derive the base name and processing mode from the file name
//! 2. Decode the source (status becomes `InProgress`)
//! 3. For each active bucket, in catalog order: compute the target size
//!    from the bucket scale and the source density, transform, encode and
//!    hand the bytes to the sink
//!    (iOS buckets also get a copy in the `.imageset` folder)
//! 4. Write the asset-catalog manifest if one was requested
//!
//! The first failing step ends the job with an `Error` status. Outputs
//! already written are left in place.

use crate::catalog::{DensityCatalog, Platform};
use crate::error::{AssetError, AssetResult};
use crate::job::{Job, JobEvent, JobStatus};
use crate::layout::OutputLayout;
use crate::manifest::{ManifestBuilder, ManifestEntry};
use crate::naming::{self, SourceMode};
use crate::sink::OutputSink;
use log::{debug, info, warn};
use resizer_core::Pix;
use resizer_transform::{NinePatch, resize, scaled_dimensions};
use std::path::{Path, PathBuf};

/// Files produced by one finished job.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobReport {
    /// Every image written, in write order
    pub outputs: Vec<PathBuf>,
    /// Asset-catalog manifest, if one was written
    pub manifest: Option<PathBuf>,
}

enum SourceImage {
    Standard(Pix),
    NinePatch(NinePatch),
}

impl SourceImage {
    fn content_dimensions(&self) -> (u32, u32) {
        match self {
            SourceImage::Standard(pix) => pix.dimensions(),
            SourceImage::NinePatch(patch) => patch.content_dimensions(),
        }
    }

    fn render(&self, width: u32, height: u32) -> AssetResult<Pix> {
        let pix = match self {
            SourceImage::Standard(pix) => resize(pix, width, height)?,
            SourceImage::NinePatch(patch) => patch.resize(width, height)?.compose()?,
        };
        Ok(pix)
    }
}

/// Converts jobs against a resolved catalog, writing through a sink.
///
/// The pipeline holds no per-job state; one instance can serve any number
/// of jobs concurrently.
pub struct AssetPipeline<'a> {
    catalog: &'a DensityCatalog,
    sink: &'a dyn OutputSink,
    output_root: Option<PathBuf>,
}

impl<'a> AssetPipeline<'a> {
    pub fn new(catalog: &'a DensityCatalog, sink: &'a dyn OutputSink) -> Self {
        Self {
            catalog,
            sink,
            output_root: None,
        }
    }

    /// Write under `root` instead of next to each source.
    pub fn with_output_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.output_root = Some(root.into());
        self
    }

    fn layout_for(&self, source: &Path) -> OutputLayout {
        match &self.output_root {
            Some(root) => OutputLayout::new(root.clone()),
            None => OutputLayout::beside(source),
        }
    }

    /// Run `job` to a terminal status.
    ///
    /// `observer` sees the initial `Pending` status, `InProgress` once the
    /// source is decoded, and the terminal status.
    ///
    /// # Errors
    ///
    /// Returns the error that ended the job; the job status then carries
    /// [`AssetError::reason`].
    pub fn run<F>(&self, job: &mut Job, mut observer: F) -> AssetResult<JobReport>
    where
        F: FnMut(&JobEvent),
    {
        observer(&job.event());

        let result = match self.load(job) {
            Ok((base, mode, pix)) => {
                job.advance(JobStatus::InProgress);
                observer(&job.event());
                self.generate(job, &base, mode, pix)
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(report) => {
                job.advance(JobStatus::Finished);
                info!(
                    "{}: wrote {} file(s)",
                    job.source().display(),
                    report.outputs.len()
                );
                observer(&job.event());
                Ok(report)
            }
            Err(e) => {
                warn!("{}: {}", job.source().display(), e);
                job.advance(JobStatus::Error(e.reason().to_string()));
                observer(&job.event());
                Err(e)
            }
        }
    }

    fn load(&self, job: &Job) -> AssetResult<(String, SourceMode, Pix)> {
        let density = job.source_density();
        if !(density.is_finite() && density > 0.0) {
            return Err(AssetError::InvalidDensity(density));
        }

        let file_name = job.file_name();
        let base = naming::base_name(&file_name)?;
        let mode = SourceMode::detect(&file_name);
        let pix = resizer_io::read_image(job.source()).map_err(|source| AssetError::Decode {
            path: job.source().to_path_buf(),
            source,
        })?;
        debug!(
            "{}: {:?} source {}x{} at density {}",
            job.source().display(),
            mode,
            pix.width(),
            pix.height(),
            density
        );
        Ok((base, mode, pix))
    }

    fn generate(
        &self,
        job: &Job,
        base: &str,
        mode: SourceMode,
        pix: Pix,
    ) -> AssetResult<JobReport> {
        let image = match mode {
            SourceMode::Standard => SourceImage::Standard(pix),
            SourceMode::NinePatch => SourceImage::NinePatch(NinePatch::decompose(&pix)?),
        };
        let (cw, ch) = image.content_dimensions();
        let layout = self.layout_for(job.source());

        let mut report = JobReport::default();
        let mut manifest = ManifestBuilder::new();

        for target in self.catalog.active() {
            let ratio = target.scale / job.source_density();
            let (tw, th) = scaled_dimensions(ratio, cw, ch);
            let out = image.render(tw, th)?;
            let data = resizer_io::write_image_mem(&out).map_err(AssetError::Encode)?;

            let file_name = naming::output_file_name(base, target);
            let path = layout.target_path(target, &file_name);
            self.write(&path, &data)?;
            debug!("{} -> {} ({}x{})", target, path.display(), out.width(), out.height());
            report.outputs.push(path);

            if target.platform == Platform::Ios {
                let path = layout.image_set_dir(base).join(&file_name);
                self.write(&path, &data)?;
                report.outputs.push(path);
                if job.emit_manifest() {
                    manifest.push(ManifestEntry {
                        label: target.label.to_string(),
                        scale: target.scale,
                        filename: file_name,
                    });
                }
            }
        }

        if !manifest.is_empty() {
            match self.write_manifest(&layout, base, &manifest) {
                Ok(path) => report.manifest = Some(path),
                Err(e) => warn!("{}: {}", job.source().display(), e),
            }
        }

        Ok(report)
    }

    fn write(&self, path: &Path, data: &[u8]) -> AssetResult<()> {
        self.sink
            .write_file(path, data)
            .map_err(|source| AssetError::Write {
                path: path.to_path_buf(),
                source,
            })
    }

    fn write_manifest(
        &self,
        layout: &OutputLayout,
        base: &str,
        builder: &ManifestBuilder,
    ) -> AssetResult<PathBuf> {
        let path = layout.manifest_path(base);
        let failed = |message: String| AssetError::ManifestWrite {
            path: path.clone(),
            message,
        };
        let json = builder.build().to_json().map_err(|e| failed(e.to_string()))?;
        self.sink
            .write_file(&path, json.as_bytes())
            .map_err(|e| failed(e.to_string()))?;
        Ok(path)
    }
}
