//! Unified error types for monsync
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from the monitoring service API
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Monitor declaration file could not be parsed
    #[error("Invalid monitor declarations: {0}")]
    Declarations(#[from] serde_json::Error),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from talking to the monitoring service
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (connect, DNS, timeout)
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The response body did not match the expected shape
    #[error("Error from {url}: {source}\n{body}")]
    Decode {
        url: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// Non-200 status where a 200 was required
    #[error("Unexpected {status} API response from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    /// The outgoing request body could not be serialized
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The HTTP client could not be constructed
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(String),
}

impl ApiError {
    /// URL of the failed request, if the error is tied to one
    pub fn url(&self) -> Option<&str> {
        match self {
            ApiError::Transport { url, .. }
            | ApiError::Decode { url, .. }
            | ApiError::UnexpectedStatus { url, .. } => Some(url),
            ApiError::Encode(_) | ApiError::ClientBuild(_) => None,
        }
    }
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Missing required config field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
