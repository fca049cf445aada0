//! Output formatting utilities
//!
//! Provides table and JSON output formatting for CLI commands.

use crate::cli::args::OutputFormat;
use crate::domain::MonitorSummary;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_output(&mut handle, data, format)
}

/// Format output into any writer
pub fn write_output<W: Write, T: Serialize + TableDisplay>(
    out: &mut W,
    data: &T,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).map_err(io::Error::other)?;
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(out, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

/// Monitor listing for display
#[derive(Debug, Clone, Serialize)]
pub struct MonitorList {
    pub monitors: Vec<MonitorSummary>,
}

impl TableDisplay for MonitorList {
    fn to_table(&self) -> String {
        let mut output = format!("Monitors: {}\n\n", self.monitors.len());

        let key_width = self
            .monitors
            .iter()
            .map(|m| m.key.len())
            .max()
            .unwrap_or(0)
            .max(3);
        let code_width = self
            .monitors
            .iter()
            .map(|m| m.code.len())
            .max()
            .unwrap_or(0)
            .max(4);

        output.push_str(&format!(
            "{:<kw$}  {:<cw$}  NAME\n",
            "KEY",
            "CODE",
            kw = key_width,
            cw = code_width
        ));
        for monitor in &self.monitors {
            output.push_str(&format!(
                "{:<kw$}  {:<cw$}  {}\n",
                monitor.key,
                monitor.code,
                monitor.display_name(),
                kw = key_width,
                cw = code_width
            ));
        }

        output
    }

    fn to_compact(&self) -> String {
        self.monitors
            .iter()
            .map(|m| format!("{}:{}", m.key, m.code))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Result of a sync for display
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    /// Monitor key to code, sorted by key
    pub codes: BTreeMap<String, String>,
    /// Whether the request was actually sent
    pub dry_run: bool,
    /// Body that would have been sent, for dry runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<serde_json::Value>,
}

impl TableDisplay for SyncReport {
    fn to_table(&self) -> String {
        let mut output = if self.dry_run {
            format!("DRY RUN: {} monitors not sent\n", self.codes.len())
        } else {
            format!("Synced {} monitors\n", self.codes.len())
        };

        for (key, code) in &self.codes {
            let code = if code.is_empty() { "-" } else { code.as_str() };
            output.push_str(&format!("  {} => {}\n", key, code));
        }

        if let Some(request) = &self.request {
            let body = serde_json::to_string_pretty(request).unwrap_or_default();
            output.push_str(&format!("\nRequest:\n{}\n", body));
        }

        output
    }

    fn to_compact(&self) -> String {
        self.codes
            .iter()
            .map(|(k, c)| format!("{}={}", k, c))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(key: &str, code: &str, name: &str) -> MonitorSummary {
        MonitorSummary {
            name: name.to_string(),
            default_name: format!("default-{}", key),
            key: key.to_string(),
            code: code.to_string(),
        }
    }

    #[test]
    fn test_monitor_list_table() {
        let list = MonitorList {
            monitors: vec![summary("backup", "abc123", "Backups"), summary("sync", "x", "")],
        };
        let table = list.to_table();

        assert!(table.starts_with("Monitors: 2"));
        assert!(table.contains("backup  abc123  Backups"));
        assert!(table.contains("default-sync"));
    }

    #[test]
    fn test_monitor_list_compact() {
        let list = MonitorList {
            monitors: vec![summary("a", "1", ""), summary("b", "2", "")],
        };
        assert_eq!(list.to_compact(), "a:1, b:2");
    }

    #[test]
    fn test_sync_report_dry_run() {
        let report = SyncReport {
            codes: BTreeMap::from([("a".to_string(), String::new())]),
            dry_run: true,
            request: Some(serde_json::json!([{"key": "a"}])),
        };
        let table = report.to_table();
        assert!(table.starts_with("DRY RUN"));
        assert!(table.contains("a => -"));
        assert!(table.contains("Request:\n[\n  {\n    \"key\": \"a\""));
    }

    #[test]
    fn test_write_json() {
        let report = SyncReport {
            codes: BTreeMap::from([("a".to_string(), "1".to_string())]),
            dry_run: false,
            request: None,
        };
        let mut out = Vec::new();
        write_output(&mut out, &report, OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["codes"]["a"], "1");
        assert_eq!(value["dry_run"], false);
        assert!(value.get("request").is_none());
    }
}
