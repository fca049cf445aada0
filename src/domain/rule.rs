//! Alerting rule domain types
//!
//! Provides `Rule` and the string-or-integer `RuleValue` threshold.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Rule threshold value
///
/// The service sends thresholds either as JSON strings or JSON integers.
/// Both decode into the same canonical string form, and encoding always
/// produces a JSON string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RuleValue(String);

impl RuleValue {
    /// Create a rule value from its string form
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the canonical string form
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RuleValue {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RuleValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<i64> for RuleValue {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for RuleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for RuleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

struct RuleValueVisitor;

impl Visitor<'_> for RuleValueVisitor {
    type Value = RuleValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or an integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(RuleValue(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(RuleValue(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(RuleValue(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(RuleValue(v.to_string()))
    }
}

impl<'de> Deserialize<'de> for RuleValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RuleValueVisitor)
    }
}

/// A single alerting condition on a monitor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rule {
    /// Rule kind (e.g., "complete_within", "not_run_in")
    pub rule_type: String,
    /// Threshold value
    pub value: RuleValue,
    /// Unit for time based thresholds (e.g., "minutes")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_unit: Option<String>,
    /// Grace period before the rule fires
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grace_seconds: Option<u64>,
}

impl Rule {
    /// Create a new rule
    pub fn new(rule_type: impl Into<String>, value: impl Into<RuleValue>) -> Self {
        Self {
            rule_type: rule_type.into(),
            value: value.into(),
            time_unit: None,
            grace_seconds: None,
        }
    }

    /// Set the time unit
    pub fn with_time_unit(mut self, unit: impl Into<String>) -> Self {
        self.time_unit = Some(unit.into());
        self
    }

    /// Set the grace period
    pub fn with_grace_seconds(mut self, seconds: u64) -> Self {
        self.grace_seconds = Some(seconds);
        self
    }
}
