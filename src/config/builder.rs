//! Configuration builder
//!
//! Merges configuration from files and CLI arguments.

use crate::config::{Config, ConfigSource};
use crate::error::ConfigError;

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file
    ///
    /// An explicitly named file must exist and parse; without a path the
    /// default locations are searched and skipped when absent.
    pub fn with_file(mut self, path: Option<&str>) -> Result<Self, ConfigError> {
        let source = match path {
            Some(path) => Some(ConfigSource::read(path)?),
            None => ConfigSource::discover()?,
        };

        if let Some(source) = source {
            self.config = source.config;
            self.config.source = Some(source.path);
        }

        Ok(self)
    }

    /// Override with CLI verbose flag
    pub fn with_verbose(mut self, verbose: Option<bool>) -> Self {
        if let Some(v) = verbose {
            self.config.general.verbose = v;
        }
        self
    }

    /// Override with CLI dry-run flag
    pub fn with_dry_run(mut self, dry_run: Option<bool>) -> Self {
        if let Some(d) = dry_run {
            self.config.general.dry_run = d;
        }
        self
    }

    /// Override with CLI/env API key
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        if let Some(k) = api_key {
            self.config.api.api_key = k;
        }
        self
    }

    /// Override with CLI/env API host
    pub fn with_api_host(mut self, host: Option<String>) -> Self {
        if let Some(h) = host {
            if self.config.api.dev {
                self.config.api.dev_host = Some(h);
            } else {
                self.config.api.host = Some(h);
            }
        }
        self
    }

    /// Override with CLI dev toggle
    pub fn with_dev(mut self, dev: Option<bool>) -> Self {
        if let Some(d) = dev {
            self.config.api.dev = d;
        }
        self
    }

    /// Override with CLI auto-discover flag
    pub fn with_auto_discover(mut self, auto_discover: Option<bool>) -> Self {
        if let Some(a) = auto_discover {
            self.config.api.auto_discover = a;
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
