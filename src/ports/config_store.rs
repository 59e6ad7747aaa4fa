//! Config file persistence.
//!
//! The injector only ever reads a whole file and overwrites a whole file,
//! so the port exposes exactly that plus the checks needed before writing.

use std::path::Path;

use crate::domain::AppError;

/// Port for reading and rewriting a configuration file.
pub trait ConfigStore {
    /// Check whether the file exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check whether the file can be written.
    ///
    /// An existing file must itself be writable; a missing file requires
    /// an existing, writable parent directory.
    fn is_writable(&self, path: &Path) -> bool;

    /// Read the file as UTF-8 text.
    fn read(&self, path: &Path) -> Result<String, AppError>;

    /// Replace the file's content, creating it if needed.
    fn write(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
