//! Cross-cutting error types for Folio.
//!
//! Domain-specific errors (e.g., `SeedError`, `ConfigError`) are defined in
//! their respective crates. They converge in `folio-cli`.

use thiserror::Error;

/// Errors that can be raised by any Folio crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
