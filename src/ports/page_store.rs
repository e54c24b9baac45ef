//! Template and generated page storage.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for reading templates and writing generated pages.
///
/// Paths are relative to the template directory.
pub trait PageStore {
    /// Absolute location of `name` inside the template directory.
    fn resolve_path(&self, name: &str) -> PathBuf;

    /// Check whether a template file exists.
    fn template_exists(&self, name: &str) -> bool;

    /// Read a template as text. Invalid UTF-8 is replaced, not rejected.
    fn read_template(&self, name: &str) -> Result<String, AppError>;

    /// Write a generated page, replacing any existing file, with mode 0644 on Unix.
    fn write_page(&self, name: &str, content: &str) -> Result<PathBuf, AppError>;

    /// Template directory root.
    fn root(&self) -> &Path;
}
