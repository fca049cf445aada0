//! Monitor sync operations
//!
//! `MonitorApi` bulk-upserts monitors and walks the paginated listing.

use super::endpoint::{page_url, put_url, resolve_endpoint};
use super::transport::{HttpTransport, Transport};
use crate::config::ApiConfig;
use crate::domain::{apply_codes, Monitor, MonitorPage, MonitorSummary};
use crate::error::{ApiError, AppError};

use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Sink for pretty-printed request/response bodies
pub type DiagnosticsSink = Box<dyn Fn(&str) + Send + Sync>;

/// Client for the monitors endpoint
pub struct MonitorApi<T: Transport = HttpTransport> {
    transport: T,
    endpoint: String,
    auto_discover: bool,
    logger: DiagnosticsSink,
}

impl MonitorApi<HttpTransport> {
    /// Create a client over HTTP
    ///
    /// Fails if the selected API host is not configured.
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let transport = HttpTransport::new(config)?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> MonitorApi<T> {
    /// Create a client over the given transport
    pub fn with_transport(config: &ApiConfig, transport: T) -> Result<Self, AppError> {
        let endpoint = resolve_endpoint(config)?;
        log::debug!("Using monitors endpoint {}", endpoint);

        Ok(Self {
            transport,
            endpoint,
            auto_discover: config.auto_discover,
            logger: Box::new(|text: &str| log::debug!("{}", text)),
        })
    }

    /// Replace the diagnostics sink
    pub fn with_logger(mut self, logger: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.logger = Box::new(logger);
        self
    }

    /// Resolved monitors endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Bulk upsert monitors in one request
    ///
    /// Returns the code the server reports for every key of `monitors`
    /// present in its response. Keys the caller did not send are ignored.
    pub fn put_monitors(
        &self,
        monitors: &HashMap<String, Monitor>,
    ) -> Result<HashMap<String, String>, ApiError> {
        let url = put_url(&self.endpoint, self.auto_discover);
        let batch: Vec<&Monitor> = monitors.values().collect();

        let body = serde_json::to_string(&batch).map_err(ApiError::Encode)?;
        let pretty = serde_json::to_string_pretty(&batch).map_err(ApiError::Encode)?;
        self.log_diagnostics("Request:", &pretty);

        let response = self.transport.put(&url, body)?;
        self.log_diagnostics("Response:", &pretty_body(&response));

        let returned: Vec<Monitor> = decode(&url, &response)?;

        let mut codes = HashMap::with_capacity(returned.len());
        for monitor in returned {
            if !monitors.contains_key(&monitor.key) {
                log::warn!("Ignoring unexpected monitor '{}' in response", monitor.key);
                continue;
            }
            // Empty codes never overwrite a caller-supplied one
            if monitor.code.is_empty() {
                continue;
            }
            codes.insert(monitor.key, monitor.code);
        }

        log::info!(
            "Synced {} monitors, {} codes returned",
            monitors.len(),
            codes.len()
        );
        Ok(codes)
    }

    /// Bulk upsert and return the monitors annotated with their codes
    pub fn sync_monitors(
        &self,
        mut monitors: HashMap<String, Monitor>,
    ) -> Result<HashMap<String, Monitor>, ApiError> {
        let codes = self.put_monitors(&monitors)?;
        let changed = apply_codes(&mut monitors, &codes);
        log::debug!("{} monitors received a new code", changed);
        Ok(monitors)
    }

    /// Fetch every monitor, one page at a time
    pub fn get_monitors(&self) -> Result<Vec<MonitorSummary>, ApiError> {
        let mut monitors = Vec::new();
        let mut page = 1;

        loop {
            let url = page_url(&self.endpoint, page);
            let response = self.transport.get(&url)?;
            let current: MonitorPage = decode(&url, &response)?;

            log::debug!(
                "Page {}: {} monitors (page size {}, total {})",
                page,
                current.monitors.len(),
                current.page_size,
                current.total_monitor_count
            );

            let exhausted = current.is_last(page);
            let empty = current.monitors.is_empty();
            monitors.extend(current.monitors);

            if exhausted {
                break;
            }
            if empty {
                log::warn!(
                    "Page {} was empty before reaching {} monitors; stopping",
                    page,
                    current.total_monitor_count
                );
                break;
            }

            page += 1;
        }

        Ok(monitors)
    }

    fn log_diagnostics(&self, label: &str, pretty: &str) {
        (self.logger)(&format!("\n{}", label));
        (self.logger)(&format!("{}\n", pretty));
    }
}

/// Indent a JSON body for humans, or pass non-JSON through as text
fn pretty_body(body: &[u8]) -> String {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|v| serde_json::to_string_pretty(&v).ok())
        .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned())
}

fn decode<D: DeserializeOwned>(url: &str, body: &[u8]) -> Result<D, ApiError> {
    serde_json::from_slice(body).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        body: String::from_utf8_lossy(body).into_owned(),
        source,
    })
}
