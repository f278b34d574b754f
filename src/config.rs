//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/orgtree/orgtree.toml`
//! 3. Explicit config file passed on the command line
//! 4. Environment variables: `ORGTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

/// Settings loading errors.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config error: {0}")]
    Env(#[from] config::ConfigError),
}

/// Result type for settings loading.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Raw settings for intermediate parsing (None means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub threshold: Option<f64>,
    pub focus: Option<String>,
}

/// Unified configuration for orgtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Default salary threshold for `over`
    pub threshold: f64,
    /// Subtree root reported next to the total headcount
    pub focus: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            threshold: 1_000_000.0,
            focus: "Craig".into(),
        }
    }
}

/// Get the XDG config directory for orgtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "orgtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("orgtree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> SettingsResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Missing keys become None; every other lookup error propagates.
fn present<T>(lookup: Result<T, ConfigError>) -> SettingsResult<Option<T>> {
    match lookup {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            threshold: overlay.threshold.unwrap_or(self.threshold),
            focus: overlay.focus.clone().unwrap_or_else(|| self.focus.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; unlike the global file it must exist
    #[instrument(level = "debug")]
    pub fn load(config_file: Option<&Path>) -> SettingsResult<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = config_file {
            current = current.merge_with(&load_raw_settings(path)?);
        }

        Self::apply_env_overrides(current)
    }

    /// Apply ORGTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> SettingsResult<Self> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("ORGTREE").try_parsing(true))
            .build()?;

        // a variable that is set but does not parse is an error, not a fallback
        if let Some(val) = present(config.get_float("threshold"))? {
            settings.threshold = val;
        }
        if let Some(val) = present(config.get_string("focus"))? {
            settings.focus = val;
        }

        Ok(settings)
    }

    /// Render as TOML, as printed by the `config` subcommand.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_partial_overlay_when_merging_then_keeps_unspecified_values() {
        let overlay = RawSettings {
            threshold: Some(5.0),
            focus: None,
        };
        let merged = Settings::default().merge_with(&overlay);
        assert_eq!(merged.threshold, 5.0);
        assert_eq!(merged.focus, "Craig");
    }

    #[test]
    fn given_missing_key_when_looking_up_then_none() {
        let lookup: Result<f64, ConfigError> = Err(ConfigError::NotFound("threshold".into()));
        assert!(present(lookup).unwrap().is_none());
    }

    #[test]
    fn given_unparsable_value_when_looking_up_then_env_error() {
        let lookup: Result<f64, ConfigError> = Err(ConfigError::Message("invalid float".into()));
        assert!(matches!(present(lookup), Err(SettingsError::Env(_))));
    }

    #[test]
    fn given_defaults_when_rendering_then_produces_toml() {
        let rendered = Settings::default().to_toml().unwrap();
        assert!(rendered.contains("threshold = 1000000.0"));
        assert!(rendered.contains("focus = \"Craig\""));
    }
}
