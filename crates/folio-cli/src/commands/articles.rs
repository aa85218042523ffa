use folio_core::SeedSnapshot;
use folio_seed::SeedProvider;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::render;

/// Handle `flo articles`.
pub fn handle(provider: &SeedProvider, flags: &GlobalFlags) -> anyhow::Result<()> {
    println!("{}", render_articles(&provider.get_seed(), flags.format)?);
    Ok(())
}

fn render_articles(seed: &SeedSnapshot, format: OutputFormat) -> anyhow::Result<String> {
    render(&seed.summaries(), format)
}
