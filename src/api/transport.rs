//! HTTP transport
//!
//! Authenticated GET/PUT primitives. The `Transport` trait lets the sync
//! operations run against a mock in tests.

use crate::config::ApiConfig;
use crate::error::ApiError;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::StatusCode;
use std::time::Duration;

/// Client-side timeout for every request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Raw request primitives used by the sync operations
///
/// Implementations return the response body for any response received,
/// whatever its status. Failing to get a response at all is an
/// `ApiError::Transport`.
pub trait Transport {
    /// Issue a GET and return the body
    fn get(&self, url: &str) -> Result<Vec<u8>, ApiError>;

    /// Issue a PUT with a JSON body and return the response body
    fn put(&self, url: &str, body: String) -> Result<Vec<u8>, ApiError>;
}

/// Blocking reqwest transport with basic auth
pub struct HttpTransport {
    client: Client,
    api_key: String,
}

impl HttpTransport {
    /// Create a transport from resolved API settings
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
        })
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .basic_auth(&self.api_key, Some(""))
            .header(CONTENT_TYPE, "application/json")
    }

    fn send(&self, url: &str, request: RequestBuilder) -> Result<(StatusCode, Vec<u8>), ApiError> {
        let transport_error = |e: reqwest::Error| ApiError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = request.send().map_err(transport_error)?;
        let status = response.status();
        let body = response.bytes().map_err(transport_error)?;
        log::debug!("{} responded {} ({} bytes)", url, status, body.len());

        Ok((status, body.to_vec()))
    }

    /// GET that additionally requires a 200 response
    pub fn get_raw_response(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let (status, body) = self.send(url, self.authorize(self.client.get(url)))?;
        if status != StatusCode::OK {
            return Err(ApiError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(body)
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let (_, body) = self.send(url, self.authorize(self.client.get(url)))?;
        Ok(body)
    }

    fn put(&self, url: &str, body: String) -> Result<Vec<u8>, ApiError> {
        let request = self
            .authorize(self.client.put(url))
            .header(CONTENT_LENGTH, body.len())
            .body(body);
        let (_, body) = self.send(url, request)?;
        Ok(body)
    }
}
