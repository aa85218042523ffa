//! Integration tests for TOML and environment configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use folio_config::{ConfigError, FolioConfig};
use pretty_assertions::assert_eq;

fn chain() -> Figment {
    Figment::from(Serialized::defaults(FolioConfig::default()))
        .merge(Toml::file("config.toml"))
        .merge(Env::prefixed("FOLIO_").split("__"))
}

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[assets]
dir = "./content"

[general]
format = "table"
strict = false
"#,
        )?;

        let config: FolioConfig = chain().extract()?;

        assert_eq!(config.assets.dir, "./content");
        assert!(config.assets.is_configured());
        assert_eq!(config.general.format, "table");
        assert!(!config.general.strict);
        Ok(())
    });
}

#[test]
fn missing_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[assets]\ndir = \"x\"\n")?;

        let config: FolioConfig = chain().extract()?;
        assert_eq!(config.general.format, "json");
        assert!(config.general.strict);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[assets]\ndir = \"from-toml\"\n")?;
        jail.set_env("FOLIO_ASSETS__DIR", "from-env");
        jail.set_env("FOLIO_GENERAL__STRICT", "false");

        let config: FolioConfig = chain().extract()?;
        assert_eq!(config.assets.dir, "from-env");
        assert!(!config.general.strict);
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_default_chain() {
    Jail::expect_with(|jail| {
        jail.create_dir(".folio")?;
        jail.create_file(".folio/config.toml", "[general]\nformat = \"raw\"\n")?;

        let config = FolioConfig::load().expect("config loads");
        assert_eq!(config.general.format, "raw");
        Ok(())
    });
}

#[test]
fn invalid_format_from_env_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("FOLIO_GENERAL__FORMAT", "yaml");

        let err = FolioConfig::from_figment(&chain()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "general.format"));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[general\nformat = ")?;

        let err = FolioConfig::from_figment(&chain()).unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
