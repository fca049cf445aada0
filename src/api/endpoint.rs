//! Endpoint resolution
//!
//! Builds the monitors endpoint URL from the configured host.

use crate::config::ApiConfig;
use crate::error::ConfigError;

/// Versioned path of the monitors collection
pub const MONITORS_PATH: &str = "/v3/monitors";

/// Resolve the monitors endpoint for the selected host
pub fn resolve_endpoint(config: &ApiConfig) -> Result<String, ConfigError> {
    let host = config.selected_host().ok_or_else(|| {
        let field = if config.dev { "api.dev_host" } else { "api.host" };
        ConfigError::MissingField(field.to_string())
    })?;

    Ok(format!("{}{}", host.trim_end_matches('/'), MONITORS_PATH))
}

/// Endpoint for a bulk put, with the auto-discover marker when enabled
pub fn put_url(endpoint: &str, auto_discover: bool) -> String {
    if auto_discover {
        format!("{}?auto-discover=1", endpoint)
    } else {
        endpoint.to_string()
    }
}

/// Endpoint for one page of the listing
pub fn page_url(endpoint: &str, page: u64) -> String {
    format!("{}?page={}", endpoint, page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_endpoint() {
        let config = ApiConfig::new("https://cronitor.io/api", "key");
        assert_eq!(
            resolve_endpoint(&config).unwrap(),
            "https://cronitor.io/api/v3/monitors"
        );
    }

    #[test]
    fn test_resolve_endpoint_trims_trailing_slash() {
        let config = ApiConfig::new("http://localhost:8000/", "key");
        assert_eq!(
            resolve_endpoint(&config).unwrap(),
            "http://localhost:8000/v3/monitors"
        );
    }

    #[test]
    fn test_resolve_endpoint_missing_host() {
        let mut config = ApiConfig::new("", "key");
        config.host = None;
        let err = resolve_endpoint(&config).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(ref f) if f == "api.host"));
    }

    #[test]
    fn test_resolve_endpoint_missing_dev_host() {
        let mut config = ApiConfig::new("https://cronitor.io/api", "key");
        config.dev = true;
        let err = resolve_endpoint(&config).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(ref f) if f == "api.dev_host"));
    }

    #[test]
    fn test_put_url() {
        assert_eq!(put_url("https://h/v3/monitors", false), "https://h/v3/monitors");
        assert_eq!(
            put_url("https://h/v3/monitors", true),
            "https://h/v3/monitors?auto-discover=1"
        );
    }

    #[test]
    fn test_page_url() {
        assert_eq!(page_url("https://h/v3/monitors", 3), "https://h/v3/monitors?page=3");
    }
}
