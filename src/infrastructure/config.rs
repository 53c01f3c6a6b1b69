// src/infrastructure/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::constants::{
    BASE_URL_ENV_VAR, CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_BASE_URL, TOKEN_ENV_VAR,
};
use crate::domain::AuthToken;

/// TOML configuration for the NoteHub client
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Transport timeout for a whole request; unset means no timeout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            token: None,
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config {}", path.display()))?;

        Ok(config)
    }

    /// `<config_dir>/notehub/config.toml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the explicitly named file, or the default file when it exists,
    /// or fall back to built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                debug!(?path, "Loading config from explicit path");
                Self::load(path)
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => {
                    debug!(?path, "Loading config from default path");
                    Self::load(path)
                }
                _ => {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Apply environment overrides read through `lookup`.
    ///
    /// Empty values are ignored.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(base_url) = non_empty(BASE_URL_ENV_VAR) {
            debug!(%base_url, "Base URL overridden from environment");
            self.api.base_url = base_url;
        }
        if let Some(token) = non_empty(TOKEN_ENV_VAR) {
            debug!("Token taken from environment");
            self.api.token = Some(token);
        }
        self
    }

    /// Apply overrides from the process environment
    pub fn with_process_env(self) -> Self {
        self.with_env_overrides(|name| std::env::var(name).ok())
    }

    /// Token to inject into the client. Missing and blank both yield `None`.
    pub fn auth_token(&self) -> Option<AuthToken> {
        self.api
            .token
            .as_deref()
            .and_then(|token| AuthToken::new(token).ok())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.api.timeout_secs.map(Duration::from_secs)
    }
}
