//! Seed loading error types.

use std::path::PathBuf;

use folio_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    /// The loader has no asset under this path.
    #[error("Seed asset not found: {path}")]
    AssetNotFound { path: String },

    /// The asset path is not a plain relative path.
    #[error("Invalid asset path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// Reading an asset from disk failed.
    #[error("Failed to read seed asset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The resolved snapshot violates an id invariant.
    #[error(transparent)]
    Invalid(#[from] CoreError),
}
