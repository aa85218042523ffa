//! The seed aggregate handed to consumers.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Article, Reference};
use crate::errors::CoreError;
use crate::responses::ArticleSummary;

/// Initial content: articles in declaration order plus references.
///
/// Built fresh for every caller. Ownership passes entirely to the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SeedSnapshot {
    pub articles: Vec<Article>,
    #[serde(default)]
    pub references: Vec<Reference>,
}

impl SeedSnapshot {
    /// Look up an article by id.
    #[must_use]
    pub fn article(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }

    /// Like [`article`](Self::article), but fails when the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] when no article has this id.
    pub fn require_article(&self, id: &str) -> Result<&Article, CoreError> {
        self.article(id).ok_or_else(|| CoreError::NotFound {
            entity_type: "article".to_string(),
            id: id.to_string(),
        })
    }

    #[must_use]
    pub fn summaries(&self) -> Vec<ArticleSummary> {
        self.articles.iter().map(ArticleSummary::from).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty() && self.references.is_empty()
    }

    /// Check that article ids and reference ids are non-empty and unique
    /// within their collection.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first empty or duplicate id.
    pub fn validate(&self) -> Result<(), CoreError> {
        check_ids("article", self.articles.iter().map(|a| a.id.as_str()))?;
        check_ids("reference", self.references.iter().map(|r| r.id.as_str()))
    }
}

fn check_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<(), CoreError> {
    let mut seen = HashSet::new();
    for (index, id) in ids.enumerate() {
        if id.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "{kind} at position {index} has an empty id"
            )));
        }
        if !seen.insert(id) {
            return Err(CoreError::Validation(format!("duplicate {kind} id '{id}'")));
        }
    }
    Ok(())
}
