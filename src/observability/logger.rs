//! Structured JSON logger
//!
//! One log line = one event. `event` comes first, then `severity`, then
//! the fields in key order. Logging is synchronous and unbuffered.

use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use super::LoggingConfig;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Per-stage detail
    Trace,
    /// Normal operations
    Info,
    /// Recoverable issues
    Warn,
    /// Query failures
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Logger gated by a minimum severity.
///
/// TRACE and INFO go to stdout, WARN and ERROR to stderr.
#[derive(Debug, Clone)]
pub struct Logger {
    enabled: bool,
    min_severity: Severity,
}

impl Logger {
    pub fn new(config: &LoggingConfig) -> Self {
        Self {
            enabled: config.enabled,
            min_severity: config.min_severity,
        }
    }

    /// A logger that never writes
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            min_severity: Severity::Error,
        }
    }

    /// Returns true if events at this severity are written
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.enabled && severity >= self.min_severity
    }

    pub fn log(&self, severity: Severity, event: &str, fields: &[(&str, &str)]) {
        if !self.is_enabled(severity) {
            return;
        }
        match severity {
            Severity::Trace | Severity::Info => write_line(&mut io::stdout(), severity, event, fields),
            Severity::Warn | Severity::Error => write_line(&mut io::stderr(), severity, event, fields),
        }
    }

    pub fn trace(&self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Trace, event, fields);
    }

    pub fn info(&self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Info, event, fields);
    }

    pub fn warn(&self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Warn, event, fields);
    }

    pub fn error(&self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Error, event, fields);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(&LoggingConfig::default())
    }
}

fn write_line<W: Write>(writer: &mut W, severity: Severity, event: &str, fields: &[(&str, &str)]) {
    let line = format_line(severity, event, fields);
    // Logging never fails a query
    let _ = writer.write_all(line.as_bytes());
    let _ = writer.flush();
}

/// Renders one log line, newline included
pub(crate) fn format_line(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut sorted: Vec<&(&str, &str)> = fields.iter().collect();
    sorted.sort_by_key(|(key, _)| *key);

    let mut line = String::with_capacity(128);
    line.push_str("{\"event\":");
    line.push_str(&quote(event));
    line.push_str(",\"severity\":");
    line.push_str(&quote(severity.as_str()));
    for (key, value) in sorted {
        line.push(',');
        line.push_str(&quote(key));
        line.push(':');
        line.push_str(&quote(value));
    }
    line.push_str("}\n");
    line
}

fn quote(text: &str) -> String {
    serde_json::Value::from(text).to_string()
}
