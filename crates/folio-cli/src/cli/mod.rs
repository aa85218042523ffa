use anyhow::anyhow;
use clap::{Args, Parser, Subcommand, ValueEnum};
use folio_config::FolioConfig;

pub mod global;

pub use global::{GlobalFlags, OutputFormat};

/// Top-level CLI parser for the `flo` binary.
#[derive(Debug, Parser)]
#[command(name = "flo", version, about = "Folio - seed content for the study library")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to general.format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read article assets from this directory instead of the bundled copies
    #[arg(long, global = true, value_name = "DIR")]
    pub assets_dir: Option<String>,
}

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Print the full seed snapshot.
    Seed,
    /// List seed articles.
    Articles,
    /// Show one article.
    Article(ArticleArgs),
    /// Print the JSON Schema of a seed type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ArticleArgs {
    /// Article id
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name: article, article_summary, reference, seed_snapshot
    #[arg(value_name = "TYPE")]
    pub type_name: String,
}

impl Cli {
    /// Resolve global flags, falling back to config for the output format.
    pub fn global_flags(&self, config: &FolioConfig) -> anyhow::Result<GlobalFlags> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&config.general.format, true)
                .map_err(|error| anyhow!("general.format: {error}"))?,
        };

        Ok(GlobalFlags {
            format,
            assets_dir: self.assets_dir.clone(),
        })
    }
}
