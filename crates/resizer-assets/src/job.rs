//! Jobs and their status

use std::fmt;
use std::path::{Path, PathBuf};

/// Lifecycle of a job.
///
/// `Pending -> InProgress -> Finished | Error`, or `Pending -> Error` when
/// the source is rejected before any work starts. `Finished` and `Error`
/// are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    Pending,
    InProgress,
    Finished,
    Error(String),
}

impl JobStatus {
    /// Whether no further transition is possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Finished | JobStatus::Error(_))
    }

    /// Whether `next` is a legal successor of this status.
    pub fn can_transition_to(&self, next: &JobStatus) -> bool {
        matches!(
            (self, next),
            (JobStatus::Pending, JobStatus::InProgress)
                | (JobStatus::Pending, JobStatus::Error(_))
                | (JobStatus::InProgress, JobStatus::Finished)
                | (JobStatus::InProgress, JobStatus::Error(_))
        )
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Pending => f.write_str("pending"),
            JobStatus::InProgress => f.write_str("in progress"),
            JobStatus::Finished => f.write_str("finished"),
            JobStatus::Error(reason) => write!(f, "error: {}", reason),
        }
    }
}

/// Status change of one job, as delivered to observers.
#[derive(Debug, Clone, PartialEq)]
pub struct JobEvent {
    pub source: PathBuf,
    pub status: JobStatus,
}

/// One source image to convert.
#[derive(Debug, Clone)]
pub struct Job {
    source: PathBuf,
    source_density: f64,
    emit_manifest: bool,
    status: JobStatus,
}

impl Job {
    /// New pending job for `source`, drawn at `source_density`
    /// (1.0 = mdpi / @1x).
    pub fn new<P: Into<PathBuf>>(source: P, source_density: f64) -> Self {
        Self {
            source: source.into(),
            source_density,
            emit_manifest: false,
            status: JobStatus::Pending,
        }
    }

    /// Request a `Contents.json` manifest for this job's image set.
    pub fn with_manifest(mut self, emit: bool) -> Self {
        self.emit_manifest = emit;
        self
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn source_density(&self) -> f64 {
        self.source_density
    }

    pub fn emit_manifest(&self) -> bool {
        self.emit_manifest
    }

    pub fn status(&self) -> &JobStatus {
        &self.status
    }

    /// File name component of the source path.
    pub fn file_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Snapshot of the current status.
    pub fn event(&self) -> JobEvent {
        JobEvent {
            source: self.source.clone(),
            status: self.status.clone(),
        }
    }

    /// Move to `next` if the transition is legal.
    ///
    /// Returns `false` and leaves the status untouched otherwise.
    pub(crate) fn advance(&mut self, next: JobStatus) -> bool {
        if self.status.can_transition_to(&next) {
            self.status = next;
            true
        } else {
            log::warn!(
                "{}: ignoring status change {} -> {}",
                self.source.display(),
                self.status,
                next
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        let mut job = Job::new("a/icon.png", 1.0);
        assert_eq!(job.status(), &JobStatus::Pending);
        assert!(!job.advance(JobStatus::Finished));
        assert!(job.advance(JobStatus::InProgress));
        assert!(!job.advance(JobStatus::Pending));
        assert!(job.advance(JobStatus::Finished));
        assert!(job.status().is_terminal());
        assert!(!job.advance(JobStatus::Error("late".into())));
        assert_eq!(job.status(), &JobStatus::Finished);
    }

    #[test]
    fn test_pending_can_fail() {
        let mut job = Job::new("bad.png", 1.0);
        assert!(job.advance(JobStatus::Error("wrong source image".into())));
        assert!(!job.advance(JobStatus::InProgress));
    }

    #[test]
    fn test_file_name() {
        let job = Job::new("/tmp/res/Button.9.png", 2.0).with_manifest(true);
        assert_eq!(job.file_name(), "Button.9.png");
        assert!(job.emit_manifest());
        assert_eq!(job.event().status, JobStatus::Pending);
    }
}
