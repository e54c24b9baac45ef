use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::PageStore;

/// Filesystem-backed page store rooted at the template directory.
#[derive(Debug, Clone)]
pub struct FilesystemPageStore {
    root: PathBuf,
}

impl FilesystemPageStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl PageStore for FilesystemPageStore {
    fn resolve_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn template_exists(&self, name: &str) -> bool {
        self.resolve_path(name).is_file()
    }

    fn read_template(&self, name: &str) -> Result<String, AppError> {
        let bytes = fs::read(self.resolve_path(name))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn write_page(&self, name: &str, content: &str) -> Result<PathBuf, AppError> {
        let path = self.resolve_path(name);
        let write_error = |source: std::io::Error| AppError::Write { path: path.clone(), source };

        fs::write(&path, content).map_err(write_error)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).map_err(write_error)?;
        }

        Ok(path)
    }

    fn root(&self) -> &Path {
        &self.root
    }
}
