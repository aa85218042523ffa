//! Resolution of asset paths to text.
//!
//! [`SeedProvider::load`](crate::SeedProvider::load) takes any [`TextLoader`],
//! so the embedded assets can be swapped for files on disk or an in-memory
//! stub without touching the seed manifest.

mod bundled;
mod directory;
mod static_text;

pub use bundled::BundledText;
pub use directory::DirectoryText;
pub use static_text::StaticText;

use crate::error::SeedError;

/// Resolves a named text resource to its contents.
pub trait TextLoader {
    /// Load the full contents of `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::AssetNotFound`] when the loader has nothing under
    /// `path`, or a loader-specific error when resolution fails.
    fn load_text(&self, path: &str) -> Result<String, SeedError>;
}

impl<T: TextLoader + ?Sized> TextLoader for &T {
    fn load_text(&self, path: &str) -> Result<String, SeedError> {
        (**self).load_text(path)
    }
}

impl<T: TextLoader + ?Sized> TextLoader for Box<T> {
    fn load_text(&self, path: &str) -> Result<String, SeedError> {
        (**self).load_text(path)
    }
}
