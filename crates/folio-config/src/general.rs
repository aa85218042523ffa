//! General application configuration.

use serde::{Deserialize, Serialize};

/// Output formats `flo` understands.
pub const FORMATS: &[&str] = &["json", "table", "raw"];

fn default_format() -> String {
    "json".to_string()
}

const fn default_strict() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default output format when `--format` is not given.
    #[serde(default = "default_format")]
    pub format: String,

    /// Fail instead of falling back to bundled assets when an override
    /// directory cannot serve an asset.
    #[serde(default = "default_strict")]
    pub strict: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            strict: default_strict(),
        }
    }
}
