//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod list;
pub mod sync;

pub use list::run_list;
pub use sync::run_sync;

use crate::cli::{Cli, Commands};
use crate::config::{Config, ConfigBuilder};
use crate::error::Result;

/// Merge the configuration file with CLI flags and environment overrides
pub fn load_config(cli: &Cli) -> Result<Config> {
    let auto_discover = match &cli.command {
        Commands::Sync(args) => args.auto_discover.then_some(true),
        _ => None,
    };

    let config = ConfigBuilder::new()
        .with_file(cli.config.as_deref())?
        .with_verbose(cli.verbose.then_some(true))
        .with_dry_run(cli.dry_run.then_some(true))
        .with_dev(cli.dev.then_some(true))
        .with_api_key(cli.api_key.clone())
        .with_api_host(cli.api_host.clone())
        .with_auto_discover(auto_discover)
        .build();

    Ok(config)
}
