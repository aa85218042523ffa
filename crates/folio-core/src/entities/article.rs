use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A unit of textual content: stable key, display title, and body text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Article {
    /// Stable identifier, used as a key by consumers.
    pub id: String,
    pub title: String,
    /// Body content, resolved from a text asset.
    pub text: String,
}

impl Article {
    /// Build an article from its three fields. No validation happens here;
    /// see [`crate::SeedSnapshot::validate`].
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            text: text.into(),
        }
    }
}
