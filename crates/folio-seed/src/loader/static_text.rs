use std::collections::HashMap;

use crate::error::SeedError;
use crate::loader::TextLoader;

/// In-memory path to text map.
#[derive(Debug, Clone, Default)]
pub struct StaticText {
    entries: HashMap<String, String>,
}

impl StaticText {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(path.into(), text.into());
    }
}

impl<P: Into<String>, T: Into<String>> FromIterator<(P, T)> for StaticText {
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(path, text)| (path.into(), text.into()))
                .collect(),
        }
    }
}

impl TextLoader for StaticText {
    fn load_text(&self, path: &str) -> Result<String, SeedError> {
        self.entries
            .get(path)
            .cloned()
            .ok_or_else(|| SeedError::AssetNotFound {
                path: path.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_inserted_text() {
        let loader = StaticText::new().with("a.txt", "alpha");
        assert_eq!(loader.load_text("a.txt").unwrap(), "alpha");
        assert!(matches!(
            loader.load_text("b.txt"),
            Err(SeedError::AssetNotFound { .. })
        ));
    }

    #[test]
    fn collects_from_pairs() {
        let loader: StaticText = [("a.txt", "alpha"), ("b.txt", "beta")].into_iter().collect();
        assert_eq!(loader.load_text("b.txt").unwrap(), "beta");
    }
}
