use folio_core::SeedSnapshot;
use folio_seed::SeedProvider;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::render;

/// Handle `flo seed`.
pub fn handle(provider: &SeedProvider, flags: &GlobalFlags) -> anyhow::Result<()> {
    println!("{}", render_seed(&provider.get_seed(), flags.format)?);
    Ok(())
}

fn render_seed(seed: &SeedSnapshot, format: OutputFormat) -> anyhow::Result<String> {
    render(seed, format)
}

#[cfg(test)]
mod tests {
    use folio_seed::get_seed;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn json_carries_articles_and_empty_references() {
        let seed = get_seed();
        let out = render_seed(&seed, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(parsed["articles"].as_array().map(Vec::len), Some(1));
        assert_eq!(parsed["articles"][0]["id"], "character-tables");
        assert_eq!(parsed["articles"][0]["text"], seed.articles[0].text.as_str());
        assert_eq!(parsed["references"], json!([]));
    }

    #[test]
    fn raw_roundtrips_to_the_same_snapshot() {
        let seed = get_seed();
        let out = render_seed(&seed, OutputFormat::Raw).unwrap();
        assert!(!out.contains('\n'));
        let parsed: SeedSnapshot = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, seed);
    }

    #[test]
    fn table_summarizes_collections() {
        let out = render_seed(&get_seed(), OutputFormat::Table).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].starts_with("key"));
        assert!(lines.iter().any(|line| line.starts_with("articles") && line.ends_with("1 item")));
        assert!(lines.iter().any(|line| line.starts_with("references") && line.ends_with("(none)")));
    }
}
