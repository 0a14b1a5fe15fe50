//! Content-root collaborators
//!
//! The facade does not know where the host keeps its assets; it only asks a
//! [`ContentRoot`] for the (possibly relative) base directory string.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result};

/// Supplies the host-defined content-root path.
///
/// The returned string is opaque to the facade: it is handed back unmodified
/// by `absolute_dir(false)` and only resolved when the caller forces an
/// absolute form.
pub trait ContentRoot {
    fn content_root(&self) -> &str;
}

/// A fixed content root, for hosts that already know their base directory.
#[derive(Debug, Clone)]
pub struct StaticRoot(String);

impl StaticRoot {
    pub fn new(root: impl Into<String>) -> Self {
        Self(root.into())
    }
}

impl ContentRoot for StaticRoot {
    fn content_root(&self) -> &str {
        &self.0
    }
}

/// Content root loaded from a `pathops.toml` config file.
///
/// ```toml
/// content_root = "assets"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RootConfig {
    pub content_root: String,
}

impl RootConfig {
    /// Load the config from a file. Format is detected from the extension;
    /// only `.toml` is supported.
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if extension != "toml" {
            return Err(Error::UnsupportedFormat { extension });
        }

        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: PathBuf::from(path),
            format: "TOML".into(),
            message: e.to_string(),
        })
    }
}

impl ContentRoot for RootConfig {
    fn content_root(&self) -> &str {
        &self.content_root
    }
}
