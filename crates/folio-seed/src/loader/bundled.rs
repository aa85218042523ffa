use crate::error::SeedError;
use crate::loader::TextLoader;
use crate::manifest;

/// Serves the assets embedded in the seed manifest.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledText;

impl TextLoader for BundledText {
    fn load_text(&self, path: &str) -> Result<String, SeedError> {
        manifest::bundled_asset(path)
            .map(|asset| asset.contents.to_owned())
            .ok_or_else(|| SeedError::AssetNotFound {
                path: path.to_string(),
            })
    }
}
