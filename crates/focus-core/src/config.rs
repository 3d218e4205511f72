//! Layered configuration using figment.
//!
//! Sources, highest priority first:
//! 1. Environment variables (`FOCUS_*`, `__` separates nested keys)
//! 2. `focus.toml` in the working directory, or an explicit file
//! 3. Built-in defaults

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ranking::FocusLimit;

pub const DEFAULT_CONFIG_FILE: &str = "focus.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

const fn default_focus_limit() -> i64 {
    3
}

fn default_collection() -> String {
    "tasks".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FocusConfig {
    /// Name of the task collection to subscribe to.
    #[serde(default = "default_collection")]
    pub collection: String,

    /// How many tasks the focus list shows. Kept raw so a bad value is
    /// reported by `focus_limit()` instead of failing the whole load.
    #[serde(default = "default_focus_limit")]
    pub focus_limit: i64,

    /// `tracing` filter used when `FOCUS_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            collection: default_collection(),
            focus_limit: default_focus_limit(),
            log_filter: default_log_filter(),
        }
    }
}

impl FocusConfig {
    /// Load from defaults, `./focus.toml` (if present) and `FOCUS_*`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Like [`load`](Self::load), but an explicit file replaces `./focus.toml`.
    /// An explicit file that does not exist is an error.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let figment = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::InvalidValue {
                        field: "config".to_string(),
                        reason: format!("file not found: {}", path.display()),
                    });
                }
                Self::figment_with(Some(path.to_path_buf()))
            }
            None => Self::figment(),
        };
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// The default provider chain. Public so tests can layer on top.
    pub fn figment() -> Figment {
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        Self::figment_with(local.exists().then_some(local))
    }

    fn figment_with(file: Option<PathBuf>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(file) = file {
            figment = figment.merge(Toml::file(file));
        }
        figment.merge(Env::prefixed("FOCUS_").split("__").ignore(&["log"]))
    }

    pub fn focus_limit(&self) -> Result<FocusLimit, ConfigError> {
        FocusLimit::try_from(self.focus_limit).map_err(|err| ConfigError::InvalidValue {
            field: "focus_limit".to_string(),
            reason: err.to_string(),
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.collection.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "collection".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        self.focus_limit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_are_correct() {
        let config = FocusConfig::default();
        assert_eq!(config.collection, "tasks");
        assert_eq!(config.focus_limit, 3);
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.focus_limit().unwrap(), FocusLimit::DEFAULT);
    }

    #[test]
    fn toml_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "focus.toml",
                r#"
                collection = "chores"
                focus_limit = 5
                "#,
            )?;

            let config = FocusConfig::load().expect("config loads");
            assert_eq!(config.collection, "chores");
            assert_eq!(config.focus_limit().unwrap().get(), 5);
            assert_eq!(config.log_filter, "info");
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("focus.toml", "focus_limit = 5")?;
            jail.set_env("FOCUS_FOCUS_LIMIT", "1");

            let config = FocusConfig::load().expect("config loads");
            assert_eq!(config.focus_limit, 1);
            Ok(())
        });
    }

    #[test]
    fn log_env_var_is_not_a_config_key() {
        Jail::expect_with(|jail| {
            jail.set_env("FOCUS_LOG", "trace");

            let config = FocusConfig::load().expect("config loads");
            assert_eq!(config.log_filter, "info");
            Ok(())
        });
    }

    #[test]
    fn negative_focus_limit_is_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("focus.toml", "focus_limit = -2")?;

            let err = FocusConfig::load().unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidValue { ref field, .. } if field == "focus_limit"
            ));
            Ok(())
        });
    }

    #[test]
    fn explicit_file_must_exist() {
        Jail::expect_with(|_jail| {
            let err = FocusConfig::load_from(Some(Path::new("missing.toml"))).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { .. }));
            Ok(())
        });
    }

    #[test]
    fn explicit_file_is_used_instead_of_local() {
        Jail::expect_with(|jail| {
            jail.create_file("focus.toml", "collection = \"local\"")?;
            jail.create_file("other.toml", "collection = \"other\"")?;

            let config = FocusConfig::load_from(Some(Path::new("other.toml"))).unwrap();
            assert_eq!(config.collection, "other");
            Ok(())
        });
    }
}
