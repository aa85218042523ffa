use folio_core::SeedSnapshot;
use folio_seed::SeedProvider;

use crate::cli::{ArticleArgs, GlobalFlags, OutputFormat};
use crate::output::render;

/// Handle `flo article <id>`.
pub fn handle(args: &ArticleArgs, provider: &SeedProvider, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rendered = render_article(&provider.get_seed(), &args.id, flags.format)?;
    print!("{rendered}");
    Ok(())
}

/// Raw format prints the body verbatim; other formats print the record.
fn render_article(seed: &SeedSnapshot, id: &str, format: OutputFormat) -> anyhow::Result<String> {
    let article = seed.require_article(id)?;
    if format == OutputFormat::Raw {
        return Ok(article.text.clone());
    }

    let mut rendered = render(article, format)?;
    rendered.push('\n');
    Ok(rendered)
}
