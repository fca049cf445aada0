//! Domain models for monsync
//!
//! Monitors, their alerting rules, and the listing projections exchanged
//! with the monitoring service.

pub mod monitor;
pub mod rule;

pub use monitor::{apply_codes, Monitor, MonitorPage, MonitorSummary};
pub use rule::{Rule, RuleValue};
