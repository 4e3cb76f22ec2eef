//! Global context for CLI commands

use crate::cli::ValidationArgs;
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};
use tronlab_core::Config;

/// Effective configuration for one invocation
pub struct Context {
    pub config: Config,
    /// File the config was read from, if any
    pub config_path: Option<PathBuf>,
    pub verbose: bool,
}

impl Context {
    /// Load tron.toml and apply command-line overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit or discovered config file cannot be
    /// read or parsed.
    pub fn new(config_path: Option<&Path>, overrides: &ValidationArgs, verbose: bool) -> Result<Self> {
        let (mut config, config_path) = match config_path {
            Some(path) => {
                let config = Config::from_file(path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?;
                (config, Some(path.to_path_buf()))
            }
            None => {
                let current_dir = std::env::current_dir()?;
                let found = Config::find(&current_dir);
                let config = match &found {
                    Some(path) => Config::from_file(path)
                        .with_context(|| format!("Failed to load config {}", path.display()))?,
                    None => Config::default(),
                };
                (config, found)
            }
        };

        apply_overrides(&mut config, overrides);
        tracing::debug!(config = ?config_path, validation = ?config.validation, "Resolved configuration");

        Ok(Self {
            config,
            config_path,
            verbose,
        })
    }
}

fn apply_overrides(config: &mut Config, overrides: &ValidationArgs) {
    if let Some(min_length) = overrides.min_length {
        config.validation.min_placeholder_length = min_length;
    }
    if overrides.trailing_whitespace {
        config.validation.check_trailing_whitespace = true;
    }
    if overrides.no_validation {
        config.validation.enabled = false;
    }
}
