use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::DocumentStore;

/// Filesystem-based document store implementation.
#[derive(Debug, Clone)]
pub struct FilesystemDocumentStore {
    root: PathBuf,
}

impl FilesystemDocumentStore {
    /// Create a document store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a document store rooted at the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }
}

impl DocumentStore for FilesystemDocumentStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn write_document(&self, file_name: &str, content: &str) -> Result<PathBuf, AppError> {
        let path = self.root.join(file_name);
        fs::write(&path, content)?;
        Ok(path)
    }
}
