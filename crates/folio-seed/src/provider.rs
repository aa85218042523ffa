use folio_core::{Article, SeedSnapshot};

use crate::error::SeedError;
use crate::loader::TextLoader;
use crate::manifest::{SEED_ARTICLES, SeedArticle};

/// Holds a resolved seed and hands out fresh copies of it.
///
/// All asset text is resolved once in [`load`](Self::load); after that
/// [`get_seed`](Self::get_seed) cannot fail and does no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedProvider {
    snapshot: SeedSnapshot,
}

impl SeedProvider {
    /// Provider over the assets embedded at compile time.
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            snapshot: crate::get_seed(),
        }
    }

    /// Resolve the seed manifest through `loader`.
    ///
    /// # Errors
    ///
    /// Propagates the loader's error for the first asset that fails to
    /// resolve, or [`SeedError::Invalid`] if the resolved ids are not unique.
    pub fn load<L: TextLoader + ?Sized>(loader: &L) -> Result<Self, SeedError> {
        Self::load_manifest(SEED_ARTICLES, loader)
    }

    /// Like [`load`](Self::load), but over an arbitrary manifest.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_manifest<L: TextLoader + ?Sized>(
        entries: &[SeedArticle],
        loader: &L,
    ) -> Result<Self, SeedError> {
        let mut articles = Vec::with_capacity(entries.len());
        for entry in entries {
            let text = loader.load_text(entry.asset.path)?;
            tracing::debug!(
                id = entry.id,
                path = entry.asset.path,
                bytes = text.len(),
                "resolved seed asset"
            );
            articles.push(Article::new(entry.id, entry.title, text));
        }

        let snapshot = SeedSnapshot {
            articles,
            references: Vec::new(),
        };
        snapshot.validate()?;

        Ok(Self { snapshot })
    }

    /// A fresh snapshot owned by the caller.
    #[must_use]
    pub fn get_seed(&self) -> SeedSnapshot {
        self.snapshot.clone()
    }
}

impl Default for SeedProvider {
    fn default() -> Self {
        Self::bundled()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::loader::{BundledText, StaticText};
    use crate::manifest::BundledAsset;

    const DUPLICATED: &[SeedArticle] = &[
        SeedArticle {
            id: "same",
            title: "First",
            asset: BundledAsset {
                path: "one.txt",
                contents: "",
            },
        },
        SeedArticle {
            id: "same",
            title: "Second",
            asset: BundledAsset {
                path: "two.txt",
                contents: "",
            },
        },
    ];

    #[test]
    fn bundled_loader_matches_embedded_seed() {
        let provider = SeedProvider::load(&BundledText).expect("bundled seed loads");
        assert_eq!(provider, SeedProvider::bundled());
        assert_eq!(provider.get_seed(), crate::get_seed());
    }

    #[test]
    fn stub_loader_replaces_text_only() {
        let loader = StaticText::new().with("article-character-tables.txt", "stub body");
        let seed = SeedProvider::load(&loader).unwrap().get_seed();

        assert_eq!(seed.articles.len(), 1);
        assert_eq!(seed.articles[0].id, "character-tables");
        assert_eq!(
            seed.articles[0].title,
            "Techniques for constructing character tables"
        );
        assert_eq!(seed.articles[0].text, "stub body");
        assert!(seed.references.is_empty());
    }

    #[test]
    fn missing_asset_propagates_loader_error() {
        let err = SeedProvider::load(&StaticText::new()).unwrap_err();
        assert!(matches!(
            err,
            SeedError::AssetNotFound { ref path } if path == "article-character-tables.txt"
        ));
    }

    #[test]
    fn duplicate_ids_fail_validation() {
        let loader = StaticText::new().with("one.txt", "1").with("two.txt", "2");
        let err = SeedProvider::load_manifest(DUPLICATED, &loader).unwrap_err();
        assert!(matches!(err, SeedError::Invalid(_)));
        assert_eq!(err.to_string(), "Validation error: duplicate article id 'same'");
    }

    #[test]
    fn accepts_trait_objects() {
        let loader: Box<dyn TextLoader> = Box::new(BundledText);
        let provider = SeedProvider::load(&loader).unwrap();
        assert_eq!(provider.get_seed().articles.len(), 1);

        let by_ref: &dyn TextLoader = &BundledText;
        assert!(SeedProvider::load(by_ref).is_ok());
    }

    #[test]
    fn each_call_returns_an_independent_snapshot() {
        let provider = SeedProvider::default();
        let mut first = provider.get_seed();
        first.articles.clear();
        assert_eq!(provider.get_seed().articles.len(), 1);
    }
}
