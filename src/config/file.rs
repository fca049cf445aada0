//! Locating and reading `monsync.toml`
//!
//! The first candidate that exists wins; later candidates are never merged in.

use crate::config::Config;
use crate::error::ConfigError;

use std::path::{Path, PathBuf};

/// File name looked up in the working directory and the user config dir
pub const FILE_NAME: &str = "monsync.toml";

/// A configuration read from disk, with the file it came from
#[derive(Debug, Clone)]
pub struct ConfigSource {
    pub path: PathBuf,
    pub config: Config,
}

impl ConfigSource {
    /// Read a named file, which must exist and parse
    pub fn read(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let text = std::fs::read_to_string(&path)
            .map_err(|_| ConfigError::FileNotFound(path.display().to_string()))?;

        Ok(Self {
            config: parse(&text)?,
            path,
        })
    }

    /// Read the first of [`candidates`] that exists, if any
    pub fn discover() -> Result<Option<Self>, ConfigError> {
        Self::first_existing(&candidates())
    }

    fn first_existing(paths: &[PathBuf]) -> Result<Option<Self>, ConfigError> {
        match paths.iter().find(|path| path.is_file()) {
            Some(path) => Self::read(path.as_path()).map(Some),
            None => Ok(None),
        }
    }
}

/// Parse TOML text into a [`Config`]
pub fn parse(text: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(text)?)
}

/// Lookup order, most specific first
pub fn candidates() -> Vec<PathBuf> {
    let user = dirs::config_dir().map(|dir| dir.join("monsync").join(FILE_NAME));

    [
        Some(PathBuf::from(FILE_NAME)),
        Some(PathBuf::from(format!(".{}", FILE_NAME))),
        user,
        Some(Path::new("/etc/monsync").join(FILE_NAME)),
    ]
    .into_iter()
    .flatten()
    .collect()
}
