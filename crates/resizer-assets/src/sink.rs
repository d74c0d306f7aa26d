//! Output sinks
//!
//! The pipeline never touches the filesystem directly; every directory and
//! file goes through an [`OutputSink`]. [`FsSink`] is the real thing,
//! [`MemorySink`] keeps everything in memory for tests and dry runs.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tempfile::NamedTempFile;

/// Destination for generated files. Shared between concurrent jobs.
pub trait OutputSink: Send + Sync {
    /// Create `dir` and its parents. Succeeds if it already exists.
    fn ensure_dir(&self, dir: &Path) -> io::Result<()>;

    /// Write `data` to `path`, replacing any existing file.
    fn write_file(&self, path: &Path, data: &[u8]) -> io::Result<()>;
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Filesystem sink.
///
/// Directory creation is serialized; files are written to a temporary file
/// in the destination directory and renamed into place.
#[derive(Debug, Default)]
pub struct FsSink {
    dirs: Mutex<()>,
}

impl FsSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputSink for FsSink {
    fn ensure_dir(&self, dir: &Path) -> io::Result<()> {
        let _guard = lock(&self.dirs);
        fs::create_dir_all(dir)
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        self.ensure_dir(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(data)?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// In-memory sink.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: Mutex<BTreeMap<PathBuf, Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of a written file.
    pub fn get(&self, path: &Path) -> Option<Vec<u8>> {
        lock(&self.files).get(path).cloned()
    }

    /// Paths of all written files, sorted.
    pub fn paths(&self) -> Vec<PathBuf> {
        lock(&self.files).keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        lock(&self.files).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OutputSink for MemorySink {
    fn ensure_dir(&self, _dir: &Path) -> io::Result<()> {
        Ok(())
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        lock(&self.files).insert(path.to_path_buf(), data.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_sink_creates_and_replaces() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("a").join("b").join("out.bin");
        let sink = FsSink::new();
        sink.write_file(&path, b"first").unwrap();
        sink.write_file(&path, b"second").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");
        // Only the final file remains in the directory
        let entries = fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_fs_sink_ensure_dir_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("x/y");
        let sink = FsSink::new();
        sink.ensure_dir(&dir).unwrap();
        sink.ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_fs_sink_concurrent_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let sink = FsSink::new();
        std::thread::scope(|s| {
            for i in 0..8 {
                let sink = &sink;
                let root = tmp.path();
                s.spawn(move || {
                    let path = root.join("shared/deep").join(format!("{}.bin", i));
                    sink.write_file(&path, &[i as u8]).unwrap();
                });
            }
        });
        assert_eq!(fs::read_dir(tmp.path().join("shared/deep")).unwrap().count(), 8);
    }

    #[test]
    fn test_memory_sink() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());
        sink.write_file(Path::new("b.png"), b"1").unwrap();
        sink.write_file(Path::new("a.png"), b"2").unwrap();
        sink.write_file(Path::new("b.png"), b"3").unwrap();
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.paths(), [PathBuf::from("a.png"), PathBuf::from("b.png")]);
        assert_eq!(sink.get(Path::new("b.png")).unwrap(), b"3");
    }
}
