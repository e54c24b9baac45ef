use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for polgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure outside of page writes.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Required flags are missing or point at something unusable.
    #[error("{0}")]
    Usage(String),

    /// Manifest is unreadable or malformed.
    #[error("{0}")]
    Configuration(String),

    /// A template listed in the manifest does not exist.
    #[error("Template not found: {}", path.display())]
    MissingTemplate { path: PathBuf },

    /// A generated page could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Page shell rendering failed.
    #[error("Failed to render page shell for '{slug}': {reason}")]
    Render { slug: String, reason: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn usage_error<S: Into<String>>(message: S) -> Self {
        AppError::Usage(message.into())
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Usage(_) | AppError::Configuration(_) => 2,
            AppError::Write { .. } => 3,
            AppError::Io(_) | AppError::MissingTemplate { .. } | AppError::Render { .. } => 1,
        }
    }
}
