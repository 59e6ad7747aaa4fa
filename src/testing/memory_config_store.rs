use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ConfigStore;

/// In-memory config store for testing.
#[derive(Default)]
pub struct MemoryConfigStore {
    pub files: RefCell<HashMap<PathBuf, String>>,
    pub read_only: RefCell<HashSet<PathBuf>>,
    pub writes: RefCell<Vec<PathBuf>>,
    pub reads: RefCell<Vec<PathBuf>>,
}

#[allow(dead_code)]
impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files.borrow_mut().insert(PathBuf::from(path), content.to_string());
        self
    }

    /// Mark a file path, or a parent directory path, as not writable.
    pub fn with_read_only(self, path: &str) -> Self {
        self.read_only.borrow_mut().insert(PathBuf::from(path));
        self
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.files.borrow().get(Path::new(path)).cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn is_writable(&self, path: &Path) -> bool {
        let read_only = self.read_only.borrow();
        if self.exists(path) {
            return !read_only.contains(path);
        }
        let parent = path.parent().unwrap_or_else(|| Path::new(""));
        !read_only.contains(parent)
    }

    fn read(&self, path: &Path) -> Result<String, AppError> {
        self.reads.borrow_mut().push(path.to_path_buf());
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            ))
        })
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.writes.borrow_mut().push(path.to_path_buf());
        self.files.borrow_mut().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
