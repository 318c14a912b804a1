//! Configuration for the collection API endpoint.
//!
//! Configuration is stored in `.shopdesk/config.yaml`. The base URL is
//! resolved in order: the `SHOPDESK_API_URL` environment variable, the config
//! file, then the development default.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, ShopdeskError};

pub const CONFIG_DIR: &str = ".shopdesk";

const API_URL_ENV: &str = "SHOPDESK_API_URL";
const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the collection API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        PathBuf::from(CONFIG_DIR).join("config.yaml")
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Resolve the base URL: environment variable first, then config file,
    /// then the development default.
    pub fn base_url(&self) -> Result<Url> {
        let raw = if let Ok(url) = env::var(API_URL_ENV)
            && !url.is_empty()
        {
            url
        } else {
            self.api_url
                .clone()
                .unwrap_or_else(|| DEFAULT_API_URL.to_string())
        };

        Url::parse(&raw)
            .map_err(|e| ShopdeskError::Config(format!("invalid API URL '{}': {}", raw, e)))
    }

    /// Set the API base URL, validating it parses
    pub fn set_api_url(&mut self, url: &str) -> Result<()> {
        Url::parse(url)
            .map_err(|e| ShopdeskError::Config(format!("invalid API URL '{}': {}", url, e)))?;
        self.api_url = Some(url.to_string());
        Ok(())
    }

    /// Where the effective base URL comes from, for `config show`.
    pub fn api_url_source(&self) -> &'static str {
        if env::var(API_URL_ENV).is_ok_and(|v| !v.is_empty()) {
            "environment"
        } else if self.api_url.is_some() {
            "config file"
        } else {
            "default"
        }
    }
}
