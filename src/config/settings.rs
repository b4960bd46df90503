//! Application settings loaded from an optional `finances.toml`.
//!
//! Only the database location is configurable. `DATABASE_URL` in the environment (or in
//! `.env`) takes precedence over the file, and the built-in default applies when neither
//! is present.

use crate::config::database::DEFAULT_DATABASE_URL;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Default settings file, relative to the working directory
pub const DEFAULT_SETTINGS_PATH: &str = "finances.toml";

/// Structure of the settings file
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// `[database]` section
    #[serde(default)]
    pub database: DatabaseSettings,
}

/// Database settings
#[derive(Debug, Default, Deserialize)]
pub struct DatabaseSettings {
    /// Connection URL understood by `SeaORM`
    pub url: Option<String>,
}

impl Settings {
    /// Picks the database URL: `env_url` first, then the file, then [`DEFAULT_DATABASE_URL`].
    #[must_use]
    pub fn database_url(&self, env_url: Option<String>) -> String {
        env_url
            .or_else(|| self.database.url.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
    }

    /// Database URL taking `DATABASE_URL` from the process environment into account.
    #[must_use]
    pub fn resolve_database_url(&self) -> String {
        self.database_url(std::env::var("DATABASE_URL").ok())
    }
}

/// Loads settings from a TOML file.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path_ref = path.as_ref();
    debug!("Loading settings from {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read settings file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse settings file {}: {e}", path_ref.display()),
    })
}

/// Loads settings from `path` when the file exists, defaults otherwise.
pub fn load_settings_or_default<P: AsRef<Path>>(path: P) -> Result<Settings> {
    if path.as_ref().exists() {
        load_settings(path)
    } else {
        debug!("No settings file at {:?}, using defaults", path.as_ref());
        Ok(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_settings() {
        let toml_str = r#"
            [database]
            url = "sqlite://custom.sqlite?mode=rwc"
        "#;

        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert_eq!(
            settings.database.url.as_deref(),
            Some("sqlite://custom.sqlite?mode=rwc")
        );
    }

    #[test]
    fn test_empty_file_is_valid() {
        let settings: Settings = toml::from_str("").unwrap();
        assert!(settings.database.url.is_none());
    }

    #[test]
    fn test_database_url_precedence() {
        let from_file = Settings {
            database: DatabaseSettings {
                url: Some("sqlite://file.sqlite".to_string()),
            },
        };

        assert_eq!(
            from_file.database_url(Some("postgres://env".to_string())),
            "postgres://env"
        );
        assert_eq!(from_file.database_url(None), "sqlite://file.sqlite");
        assert_eq!(Settings::default().database_url(None), DEFAULT_DATABASE_URL);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let settings = load_settings_or_default("does/not/exist/finances.toml").unwrap();
        assert!(settings.database.url.is_none());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = std::env::temp_dir().join(format!("finances-settings-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("finances.toml");
        std::fs::write(&path, "[database\nurl = 1").unwrap();

        let err = load_settings(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
