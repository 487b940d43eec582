use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use tracing::{info, warn};

pub const NAVIGATION_MODE_ENV: &str = "QSTATE_NAVIGATION_MODE";
pub const PRESERVE_ASIDE_UPDATE_ENV: &str = "QSTATE_PRESERVE_ASIDE_UPDATE";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid navigation mode '{0}', expected 'push' or 'replace'")]
    InvalidNavigationMode(String),
    #[error("Invalid boolean '{0}'")]
    InvalidBool(String),
}

/// How a mutation updates the browser history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMode {
    /// Each mutation adds a history entry
    #[default]
    Push,
    /// Each mutation overwrites the current history entry
    Replace,
}

impl FromStr for NavigationMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "push" => Ok(NavigationMode::Push),
            "replace" => Ok(NavigationMode::Replace),
            _ => Err(ConfigError::InvalidNavigationMode(s.to_string())),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Store configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    #[serde(default)]
    pub navigation_mode: NavigationMode,
    /// Update the address without a full reload (keeps scroll position and
    /// the component tree)
    #[serde(default = "default_true")]
    pub preserve_aside_update: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            navigation_mode: NavigationMode::Push,
            preserve_aside_update: true,
        }
    }
}

impl StoreConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read overrides from the environment, keeping defaults for anything
    /// missing or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(NAVIGATION_MODE_ENV).filter(|s| !s.is_empty()) {
            match raw.parse() {
                Ok(mode) => config.navigation_mode = mode,
                Err(e) => warn!("Ignoring {}: {}", NAVIGATION_MODE_ENV, e),
            }
        }

        if let Some(raw) = lookup(PRESERVE_ASIDE_UPDATE_ENV).filter(|s| !s.is_empty()) {
            match parse_bool(&raw) {
                Ok(value) => config.preserve_aside_update = value,
                Err(e) => warn!("Ignoring {}: {}", PRESERVE_ASIDE_UPDATE_ENV, e),
            }
        }

        info!(
            "Query state config: mode={:?}, preserve_aside_update={}",
            config.navigation_mode, config.preserve_aside_update
        );
        config
    }
}

fn parse_bool(raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool(raw.to_string())),
    }
}
