use anyhow::bail;
use folio_core::{Article, ArticleSummary, Reference, SeedSnapshot};
use schemars::{Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::SchemaArgs;
use crate::output::output;

/// Names accepted by `flo schema`.
pub const SCHEMA_TYPES: &[&str] = &["article", "article_summary", "reference", "seed_snapshot"];

/// Handle `flo schema <type>`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(schema) = schema_by_name(&args.type_name) else {
        bail!(
            "unknown schema type '{}' (expected one of: {})",
            args.type_name,
            SCHEMA_TYPES.join(", ")
        );
    };
    output(&schema, flags.format)
}

fn schema_by_name(name: &str) -> Option<Schema> {
    let schema = match name {
        "article" => schema_for!(Article),
        "article_summary" => schema_for!(ArticleSummary),
        "reference" => schema_for!(Reference),
        "seed_snapshot" => schema_for!(SeedSnapshot),
        _ => return None,
    };
    Some(schema)
}
