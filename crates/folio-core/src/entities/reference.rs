use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Related material attached to the seed.
///
/// The payload is opaque to Folio: only `id` is interpreted (for uniqueness
/// checks). `data` is carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Reference {
    pub id: String,
    #[serde(default)]
    pub data: serde_json::Value,
}
