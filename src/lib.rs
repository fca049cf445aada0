//! monsync - monitor sync client library
//!
//! This library synchronizes locally declared monitors with a remote
//! monitoring service: bulk upserts and paginated listing over HTTPS.
//!
//! # Modules
//!
//! - [`api`]: Transport, endpoint resolution, and sync operations
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: Monitor and rule models
//! - [`error`]: Error types

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(test)]
pub mod mock;

pub use api::MonitorApi;
pub use error::{AppError, Result};
