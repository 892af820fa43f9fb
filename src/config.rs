//! Configuration System
//!
//! Layered configuration: defaults, then an optional TOML file (explicit
//! path or the XDG config dir), then `GHBOOK_*` environment overrides.
//! The GitHub token additionally falls back to `GITHUB_TOKEN`.

use crate::collab::PERMISSION_LEVELS;
use crate::error::ApiError;
use crate::logging::LoggingConfig;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GhbookConfig {
    /// GitHub access token (needs the `repo` scope)
    pub token: Option<String>,

    /// GitHub API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Permission level used when `--permission` is not given
    #[serde(default = "default_permission")]
    pub default_permission: String,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_api_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_permission() -> String {
    "push".to_string()
}

impl Default for GhbookConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_base_url: default_api_base_url(),
            default_permission: default_permission(),
            logging: LoggingConfig::default(),
        }
    }
}

impl GhbookConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_base_url.trim().is_empty() {
            return Err("API base URL cannot be empty".to_string());
        }
        if !PERMISSION_LEVELS.contains(&self.default_permission.as_str()) {
            return Err(format!(
                "Unknown default permission '{}' (expected one of: {})",
                self.default_permission,
                PERMISSION_LEVELS.join(", ")
            ));
        }
        Ok(())
    }

    /// The configured token, or a configuration error telling the user
    /// where to put one.
    pub fn require_token(&self) -> Result<&str, ApiError> {
        self.token.as_deref().ok_or_else(|| {
            ApiError::ConfigError(
                "No GitHub token configured (set `token` in ghbook.toml, \
                 GHBOOK_TOKEN, or GITHUB_TOKEN)"
                    .to_string(),
            )
        })
    }
}

/// Configuration loader facade
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration, optionally from an explicit file path. When no
    /// path is given the default XDG location is used if present.
    pub fn load(explicit_path: Option<&Path>) -> Result<GhbookConfig, ApiError> {
        let mut builder = Config::builder();

        match explicit_path {
            Some(path) => {
                builder = builder.add_source(File::from(path));
            }
            None => {
                if let Some(path) = Self::default_config_path() {
                    if path.exists() {
                        builder = builder.add_source(File::from(path).required(false));
                    }
                }
            }
        }

        builder = builder.add_source(Environment::with_prefix("GHBOOK"));

        let mut config: GhbookConfig = builder.build()?.try_deserialize()?;

        if config.token.is_none() {
            config.token = std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());
        }

        config.validate().map_err(ApiError::ConfigError)?;

        Ok(config)
    }

    /// Default config file path: `$XDG_CONFIG_HOME/ghbook/ghbook.toml`
    /// (or the platform equivalent).
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "ghbook")
            .map(|dirs| dirs.config_dir().join("ghbook.toml"))
    }
}
