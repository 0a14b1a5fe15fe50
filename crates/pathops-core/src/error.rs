//! Error types for pathops-core

use std::path::PathBuf;

/// Result type for internal pathops-core operations.
///
/// These errors never cross the facade boundary; [`crate::PathOps`] converts
/// them into failed [`crate::Outcome`]s at each operation entry point.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur beneath the facade.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Launcher dispatch failed for {path}: {source}")]
    Launcher {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
