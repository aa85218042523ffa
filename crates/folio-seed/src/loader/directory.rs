use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::error::SeedError;
use crate::loader::TextLoader;

/// Reads assets from `<root>/<path>` on disk.
///
/// Only plain relative paths are accepted; anything that could escape `root`
/// is rejected before touching the filesystem.
#[derive(Debug, Clone)]
pub struct DirectoryText {
    root: PathBuf,
}

impl DirectoryText {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, SeedError> {
        let relative = Path::new(path);
        let invalid = |reason: &str| SeedError::InvalidPath {
            path: path.to_string(),
            reason: reason.to_string(),
        };

        if path.is_empty() {
            return Err(invalid("path is empty"));
        }
        if relative.is_absolute() {
            return Err(invalid("absolute paths are not allowed"));
        }
        if !relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)))
        {
            return Err(invalid("path must not contain '.', '..' or a root"));
        }

        Ok(self.root.join(relative))
    }
}

impl TextLoader for DirectoryText {
    fn load_text(&self, path: &str) -> Result<String, SeedError> {
        let full = self.resolve(path)?;
        tracing::debug!(path = %full.display(), "reading seed asset from disk");

        std::fs::read_to_string(&full).map_err(|source| match source.kind() {
            ErrorKind::NotFound => SeedError::AssetNotFound {
                path: path.to_string(),
            },
            _ => SeedError::Io { path: full, source },
        })
    }
}
