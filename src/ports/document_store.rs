use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Destination for emitted documents.
pub trait DocumentStore {
    /// Directory documents are written into.
    fn root(&self) -> &Path;

    /// Create or overwrite `file_name` under the store root with `content`.
    ///
    /// The write is a single truncate-and-replace; returns the path written.
    fn write_document(&self, file_name: &str, content: &str) -> Result<PathBuf, AppError>;
}
