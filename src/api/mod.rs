//! Monitoring service API
//!
//! Transport primitives, endpoint resolution, and the sync operations built
//! on them.

pub mod client;
pub mod endpoint;
pub mod transport;

pub use client::{DiagnosticsSink, MonitorApi};
pub use endpoint::{resolve_endpoint, MONITORS_PATH};
pub use transport::{HttpTransport, Transport, REQUEST_TIMEOUT};
