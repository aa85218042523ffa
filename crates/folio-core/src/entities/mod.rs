//! Entity structs for Folio seed content.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation.

mod article;
mod reference;

pub use article::Article;
pub use reference::Reference;
