//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigSource;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Production API host
pub const DEFAULT_API_HOST: &str = "https://cronitor.io/api";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Monitoring service settings
    pub api: ApiConfig,
    /// File the settings were read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,
    /// Dry run mode
    pub dry_run: bool,
}

/// Monitoring service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Production API host base URL
    pub host: Option<String>,
    /// Development API host base URL
    pub dev_host: Option<String>,
    /// Use the development host
    pub dev: bool,
    /// API key, sent as the basic-auth username
    pub api_key: String,
    /// User-Agent header value
    pub user_agent: String,
    /// Ask the server to accept unknown monitors as newly discovered
    pub auto_discover: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: Some(DEFAULT_API_HOST.to_string()),
            dev_host: None,
            dev: false,
            api_key: String::new(),
            user_agent: default_user_agent(),
            auto_discover: false,
        }
    }
}

impl ApiConfig {
    /// Config pointing at `host` with the given key
    pub fn new(host: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Host selected by the dev toggle
    pub fn selected_host(&self) -> Option<&str> {
        let host = if self.dev {
            self.dev_host.as_deref()
        } else {
            self.host.as_deref()
        };
        host.map(str::trim).filter(|h| !h.is_empty())
    }
}

/// User-Agent sent when none is configured
pub fn default_user_agent() -> String {
    format!("monsync/{}", env!("CARGO_PKG_VERSION"))
}
