//! Mock implementations for testing
//!
//! Provides a scripted transport for exercising the sync operations without
//! a network.

use crate::api::Transport;
use crate::error::ApiError;

use std::collections::VecDeque;
use std::sync::Mutex;

/// A request seen by the mock transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub body: Option<String>,
}

/// Scripted outcome of one request
#[derive(Debug)]
enum Reply {
    Body(String),
    Failure(String),
}

/// Mock transport replaying scripted replies in order
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    /// Create a mock with no scripted replies
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: queue a response body
    pub fn respond(self, body: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Reply::Body(body.into()));
        self
    }

    /// Builder: queue a transport failure
    pub fn fail(self, message: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Reply::Failure(message.into()));
        self
    }

    /// Requests made so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn reply(&self, request: RecordedRequest) -> Result<Vec<u8>, ApiError> {
        let url = request.url.clone();
        self.requests.lock().unwrap().push(request);

        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Body(body)) => Ok(body.into_bytes()),
            Some(Reply::Failure(message)) => Err(ApiError::Transport { url, message }),
            None => Err(ApiError::Transport {
                url,
                message: "no scripted reply".to_string(),
            }),
        }
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        self.reply(RecordedRequest {
            method: "GET",
            url: url.to_string(),
            body: None,
        })
    }

    fn put(&self, url: &str, body: String) -> Result<Vec<u8>, ApiError> {
        self.reply(RecordedRequest {
            method: "PUT",
            url: url.to_string(),
            body: Some(body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_replays_in_order() {
        let mock = MockTransport::new().respond("first").fail("down");

        assert_eq!(mock.get("http://a").unwrap(), b"first");
        assert!(matches!(
            mock.put("http://b", "{}".to_string()),
            Err(ApiError::Transport { .. })
        ));
        assert!(mock.get("http://c").is_err());

        let requests = mock.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[1].method, "PUT");
        assert_eq!(requests[1].body.as_deref(), Some("{}"));
    }
}
