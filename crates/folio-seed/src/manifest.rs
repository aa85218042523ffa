//! Static table of seed articles.
//!
//! Each entry names the asset its body is read from. The bundled contents are
//! embedded at compile time so the default seed never touches the filesystem.

/// A text asset shipped inside the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundledAsset {
    /// Loader-relative path, also the file name under `assets/`.
    pub path: &'static str,
    pub contents: &'static str,
}

/// Declaration of one seed article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedArticle {
    pub id: &'static str,
    pub title: &'static str,
    pub asset: BundledAsset,
}

pub const CHARACTER_TABLES: BundledAsset = BundledAsset {
    path: "article-character-tables.txt",
    contents: include_str!("../assets/article-character-tables.txt"),
};

/// Seed articles in declaration order.
pub const SEED_ARTICLES: &[SeedArticle] = &[SeedArticle {
    id: "character-tables",
    title: "Techniques for constructing character tables",
    asset: CHARACTER_TABLES,
}];

/// Find a bundled asset by its loader path.
#[must_use]
pub fn bundled_asset(path: &str) -> Option<&'static BundledAsset> {
    SEED_ARTICLES
        .iter()
        .map(|entry| &entry.asset)
        .find(|asset| asset.path == path)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn manifest_ids_are_unique_and_non_empty() {
        let mut seen = HashSet::new();
        for entry in SEED_ARTICLES {
            assert!(!entry.id.is_empty());
            assert!(seen.insert(entry.id), "duplicate id {}", entry.id);
        }
    }

    #[test]
    fn bundled_assets_are_not_empty() {
        for entry in SEED_ARTICLES {
            assert!(
                !entry.asset.contents.trim().is_empty(),
                "asset {} is empty",
                entry.asset.path
            );
        }
    }

    #[test]
    fn lookup_by_path() {
        assert_eq!(
            bundled_asset("article-character-tables.txt"),
            Some(&CHARACTER_TABLES)
        );
        assert!(bundled_asset("missing.txt").is_none());
    }
}
