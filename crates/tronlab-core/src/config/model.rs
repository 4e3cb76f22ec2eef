use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::consts::{self, CONFIG_FILE_NAME};
use crate::error::{Result, TronlabError};

/// tron.toml schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
    #[serde(default)]
    pub watch: WatchConfig,
}

/// Options recognised by [`crate::validate`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// When false, validation short-circuits to an empty result
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_min_placeholder_length")]
    pub min_placeholder_length: usize,
    #[serde(default)]
    pub check_trailing_whitespace: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_placeholder_length: consts::validation::MIN_PLACEHOLDER_LENGTH,
            check_trailing_whitespace: false,
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_min_placeholder_length() -> usize {
    consts::validation::MIN_PLACEHOLDER_LENGTH
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewConfig {
    #[serde(default = "default_auto_refresh")]
    pub auto_refresh: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self { auto_refresh: true }
    }
}

fn default_auto_refresh() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: consts::watch::DEBOUNCE_MS,
            poll_interval_ms: consts::watch::POLL_INTERVAL_MS,
        }
    }
}

fn default_debounce_ms() -> u64 {
    consts::watch::DEBOUNCE_MS
}

fn default_poll_interval_ms() -> u64 {
    consts::watch::POLL_INTERVAL_MS
}

impl Config {
    /// Parse tron.toml content
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.check()?;
        Ok(config)
    }

    /// Read tron.toml from `path`
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| TronlabError::ConfigParseError {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        Self::parse(&content)
    }

    /// Find tron.toml in `start` or one of its ancestors
    pub fn find(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
    }

    /// Load the nearest tron.toml, falling back to defaults when none exists
    pub fn discover(start: &Path) -> Result<Self> {
        match Self::find(start) {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    fn check(&self) -> Result<()> {
        if self.watch.poll_interval_ms == 0 {
            return Err(TronlabError::ConfigInvalidValue {
                field: "watch.poll_interval_ms".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
