//! Response types returned as JSON by `flo` listing commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Article;

/// One row of `flo articles`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ArticleSummary {
    pub id: String,
    pub title: String,
    /// Unicode scalar values in the body.
    pub chars: usize,
    pub lines: usize,
}

impl From<&Article> for ArticleSummary {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            chars: article.text.chars().count(),
            lines: article.text.lines().count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_chars_and_lines() {
        let article = Article::new("a", "A", "χ(g)\nsecond line\n");
        let summary = ArticleSummary::from(&article);
        assert_eq!(summary.id, "a");
        assert_eq!(summary.title, "A");
        assert_eq!(summary.chars, 17);
        assert_eq!(summary.lines, 2);
    }

    #[test]
    fn empty_text_has_no_lines() {
        let summary = ArticleSummary::from(&Article::new("a", "A", ""));
        assert_eq!(summary.chars, 0);
        assert_eq!(summary.lines, 0);
    }
}
