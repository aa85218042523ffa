//! Asset source configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AssetsConfig {
    /// Directory holding asset overrides. Empty means the bundled assets.
    #[serde(default)]
    pub dir: String,
}

impl AssetsConfig {
    /// Whether an override directory is set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.dir.trim().is_empty()
    }

    #[must_use]
    pub fn dir_path(&self) -> Option<PathBuf> {
        self.is_configured().then(|| PathBuf::from(self.dir.trim()))
    }
}
