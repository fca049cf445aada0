//! List command implementation
//!
//! Lists every monitor known to the service.

use crate::api::MonitorApi;
use crate::cli::args::OutputFormat;
use crate::cli::output::{print_output, MonitorList};
use crate::config::ApiConfig;
use crate::error::Result;

/// Execute the list command
pub fn run_list(api_config: &ApiConfig, format: OutputFormat) -> Result<()> {
    let api = MonitorApi::new(api_config)?;
    let monitors = api.get_monitors()?;

    log::info!("Fetched {} monitors from {}", monitors.len(), api.endpoint());
    print_output(&MonitorList { monitors }, format)?;

    Ok(())
}
