//! # folio-seed
//!
//! Bundled seed content for Folio.
//!
//! [`get_seed`] returns the default snapshot built from assets embedded at
//! compile time. [`SeedProvider`] resolves the same manifest through any
//! [`TextLoader`], which is how the CLI serves asset overrides from disk and
//! how tests substitute stub text.
//!
//! ```
//! let seed = folio_seed::get_seed();
//! assert_eq!(seed.articles[0].id, "character-tables");
//! assert!(seed.references.is_empty());
//! ```

mod error;
pub mod loader;
pub mod manifest;
mod provider;

pub use error::SeedError;
pub use loader::{BundledText, DirectoryText, StaticText, TextLoader};
pub use manifest::{BundledAsset, SEED_ARTICLES, SeedArticle};
pub use provider::SeedProvider;

use folio_core::{Article, SeedSnapshot};

/// Build the default seed: every manifest article with its bundled text, and
/// no references.
///
/// Pure and infallible. Each call returns a new snapshot owned by the caller.
#[must_use]
pub fn get_seed() -> SeedSnapshot {
    SeedSnapshot {
        articles: SEED_ARTICLES
            .iter()
            .map(|entry| Article::new(entry.id, entry.title, entry.asset.contents))
            .collect(),
        references: Vec::new(),
    }
}
