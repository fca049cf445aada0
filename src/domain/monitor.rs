//! Monitor domain types
//!
//! `Monitor` is the unit of synchronization; `MonitorSummary` and
//! `MonitorPage` are the read projections returned by listing.

use super::rule::Rule;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Decode `null` as the type's empty value
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A monitor definition as exchanged with the service
///
/// `key` is chosen by the caller and stays stable across syncs; it is the
/// join key between local declarations and server responses. `code` is
/// assigned by the server and is empty until then.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Monitor {
    /// Display name
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "nullable"
    )]
    pub name: String,
    /// Fallback name used when no display name is set
    #[serde(rename = "defaultName", deserialize_with = "nullable")]
    pub default_name: String,
    /// Host the job runs on
    #[serde(deserialize_with = "nullable")]
    pub host: String,
    /// Command line of the job
    #[serde(rename = "commandToRun", deserialize_with = "nullable")]
    pub command_to_run: String,
    /// User the job runs as
    #[serde(rename = "runAs", deserialize_with = "nullable")]
    pub run_as: String,
    /// Stable unique identifier
    #[serde(deserialize_with = "nullable")]
    pub key: String,
    /// Alerting rules, in order
    #[serde(deserialize_with = "nullable")]
    pub rules: Vec<Rule>,
    /// Labels
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<String>,
    /// Queue name
    #[serde(deserialize_with = "nullable")]
    pub queue: String,
    /// Monitor kind (e.g., "job", "heartbeat")
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,
    /// Server-assigned identifier
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "nullable"
    )]
    pub code: String,
    /// IANA timezone of the schedule
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "nullable"
    )]
    pub timezone: String,
    /// Note attached to alerts
    #[serde(
        rename = "defaultNote",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "nullable"
    )]
    pub note: String,
    /// Channel type to destination identifiers
    #[serde(
        skip_serializing_if = "HashMap::is_empty",
        deserialize_with = "nullable"
    )]
    pub notifications: HashMap<String, Vec<String>>,
    /// Suppress passing job output through to stdout (local only)
    #[serde(skip)]
    pub no_stdout_passthru: bool,
}

impl Monitor {
    /// Create a monitor with the given key
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the fallback name
    pub fn with_default_name(mut self, name: impl Into<String>) -> Self {
        self.default_name = name.into();
        self
    }

    /// Set the monitor kind
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Set the server-assigned code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Append a rule
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add a notification destination for a channel type
    pub fn with_notification(
        mut self,
        channel: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        self.notifications
            .entry(channel.into())
            .or_default()
            .push(destination.into());
        self
    }

    /// Name to show to users
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.default_name
        } else {
            &self.name
        }
    }
}

impl fmt::Display for Monitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name(), self.key)
    }
}

/// Lightweight monitor listing entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorSummary {
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "nullable"
    )]
    pub name: String,
    #[serde(rename = "defaultName", deserialize_with = "nullable")]
    pub default_name: String,
    #[serde(deserialize_with = "nullable")]
    pub key: String,
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "nullable"
    )]
    pub code: String,
}

impl MonitorSummary {
    /// Name to show to users
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.default_name
        } else {
            &self.name
        }
    }
}

/// One page of the monitor listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MonitorPage {
    /// Number of monitors across all pages
    #[serde(deserialize_with = "nullable")]
    pub total_monitor_count: i64,
    /// Number of monitors per page
    #[serde(deserialize_with = "nullable")]
    pub page_size: i64,
    /// Monitors on this page
    #[serde(deserialize_with = "nullable")]
    pub monitors: Vec<MonitorSummary>,
}

impl MonitorPage {
    /// Whether `page` (1-based) is the last page to fetch
    pub fn is_last(&self, page: u64) -> bool {
        let page = i64::try_from(page).unwrap_or(i64::MAX);
        page.saturating_mul(self.page_size) >= self.total_monitor_count
    }
}

/// Write server-assigned codes back into a keyed set of monitors
///
/// Codes for keys missing from `monitors` are ignored. Returns the number of
/// monitors whose code changed.
pub fn apply_codes(
    monitors: &mut HashMap<String, Monitor>,
    codes: &HashMap<String, String>,
) -> usize {
    let mut changed = 0;
    for (key, code) in codes {
        if let Some(monitor) = monitors.get_mut(key) {
            if monitor.code != *code {
                monitor.code = code.clone();
                changed += 1;
            }
        }
    }
    changed
}
