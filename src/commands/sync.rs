//! Sync command implementation
//!
//! Reads monitor declarations from a JSON file and upserts them.

use crate::api::MonitorApi;
use crate::cli::args::{OutputFormat, SyncArgs};
use crate::cli::output::{print_output, SyncReport};
use crate::config::ApiConfig;
use crate::domain::Monitor;
use crate::error::{ConfigError, Result};

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Execute the sync command
pub fn run_sync(
    args: &SyncArgs,
    api_config: &ApiConfig,
    format: OutputFormat,
    dry_run: bool,
) -> Result<()> {
    let monitors = load_monitors(&args.file)?;
    log::info!("Loaded {} monitors from {}", monitors.len(), args.file);

    if dry_run {
        let report = dry_run_report(&monitors)?;
        print_output(&report, format)?;
        return Ok(());
    }

    let api = MonitorApi::new(api_config)?;
    let synced = api.sync_monitors(monitors)?;

    let report = SyncReport {
        codes: synced
            .into_iter()
            .map(|(key, monitor)| (key, monitor.code))
            .collect::<BTreeMap<_, _>>(),
        dry_run: false,
        request: None,
    };
    print_output(&report, format)?;

    Ok(())
}

/// Report what a sync would send without contacting the service
pub fn dry_run_report(monitors: &HashMap<String, Monitor>) -> Result<SyncReport> {
    let batch: Vec<&Monitor> = monitors.values().collect();
    let request = serde_json::to_value(&batch)?;
    log::info!(
        "DRY RUN: Would send {} monitors:\n{}",
        batch.len(),
        serde_json::to_string_pretty(&request)?
    );

    Ok(SyncReport {
        codes: monitors
            .iter()
            .map(|(key, monitor)| (key.clone(), monitor.code.clone()))
            .collect(),
        dry_run: true,
        request: Some(request),
    })
}

/// Read a JSON array of monitors, keyed by their `key`
pub fn load_monitors<P: AsRef<Path>>(path: P) -> Result<HashMap<String, Monitor>> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let declared: Vec<Monitor> = serde_json::from_str(&content)?;

    let mut monitors = HashMap::with_capacity(declared.len());
    for monitor in declared {
        if monitor.key.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "key".to_string(),
                message: format!("monitor '{}' has no key", monitor.display_name()),
            }
            .into());
        }
        if monitors.contains_key(&monitor.key) {
            return Err(ConfigError::InvalidValue {
                key: "key".to_string(),
                message: format!("duplicate monitor key '{}'", monitor.key),
            }
            .into());
        }
        monitors.insert(monitor.key.clone(), monitor);
    }

    Ok(monitors)
}
