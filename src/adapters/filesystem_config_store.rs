//! `ConfigStore` implementation backed by the local filesystem.

use std::fs::{self, OpenOptions};
use std::path::Path;

use crate::domain::AppError;
use crate::ports::ConfigStore;

/// Filesystem-backed config store. Paths are used as given, so relative
/// paths resolve against the process working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemConfigStore;

impl FilesystemConfigStore {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigStore for FilesystemConfigStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_writable(&self, path: &Path) -> bool {
        match fs::metadata(path) {
            // No truncation: the file is left untouched.
            Ok(meta) if meta.is_file() => OpenOptions::new().write(true).open(path).is_ok(),
            Ok(_) => false,
            Err(_) => directory_accepts_files(parent_dir(path)),
        }
    }

    fn read(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(AppError::from)
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content).map_err(AppError::from)
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Probe by creating (and dropping) a temporary file in `dir`.
fn directory_accepts_files(dir: &Path) -> bool {
    dir.is_dir()
        && tempfile::Builder::new().prefix(".factory-injector-probe").tempfile_in(dir).is_ok()
}
