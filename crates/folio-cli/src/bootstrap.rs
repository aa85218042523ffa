use std::path::PathBuf;

use anyhow::Context;
use folio_config::FolioConfig;
use folio_seed::{DirectoryText, SeedProvider};

use crate::cli::GlobalFlags;

pub fn load_config() -> anyhow::Result<FolioConfig> {
    FolioConfig::load_with_dotenv().context("failed to load folio configuration")
}

/// Pick the seed source: `--assets-dir`, then `assets.dir`, then the bundled assets.
/// A blank directory means unset in both places.
///
/// With `general.strict = false` an unusable override directory downgrades to
/// a warning and the bundled seed.
pub fn load_provider(flags: &GlobalFlags, config: &FolioConfig) -> anyhow::Result<SeedProvider> {
    let dir = flags
        .assets_dir
        .as_deref()
        .map(str::trim)
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| config.assets.dir_path());

    let Some(dir) = dir else {
        tracing::debug!("using bundled seed assets");
        return Ok(SeedProvider::bundled());
    };

    match SeedProvider::load(&DirectoryText::new(&dir)) {
        Ok(provider) => Ok(provider),
        Err(error) if !config.general.strict => {
            tracing::warn!(
                %error,
                dir = %dir.display(),
                "asset override unusable; falling back to bundled seed"
            );
            Ok(SeedProvider::bundled())
        }
        Err(error) => Err(error)
            .with_context(|| format!("failed to load seed assets from {}", dir.display())),
    }
}
