//! # folio-core
//!
//! Core types and error types for Folio.
//!
//! This crate provides the foundational types shared across all Folio crates:
//! - Entity structs for seed content (articles, references)
//! - The `SeedSnapshot` aggregate handed to consumers
//! - Listing response types
//! - Cross-cutting error types

pub mod entities;
pub mod errors;
pub mod responses;
pub mod snapshot;

pub use entities::{Article, Reference};
pub use errors::CoreError;
pub use responses::ArticleSummary;
pub use snapshot::SeedSnapshot;
