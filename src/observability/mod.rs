//! Observability for query execution
//!
//! - Structured JSON log lines with deterministic key order
//! - Begin/complete scopes around each query
//! - Synchronous, no background threads
//!
//! Observation is read-only: nothing logged here feeds back into results.

mod logger;
mod scope;

pub use logger::{Logger, Severity};
pub use scope::ObservationScope;

use serde::{Deserialize, Serialize};

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether any log line is written (default: true)
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Lowest severity written (default: WARN)
    #[serde(default = "default_min_severity")]
    pub min_severity: Severity,
}

fn default_enabled() -> bool {
    true
}

fn default_min_severity() -> Severity {
    Severity::Warn
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            min_severity: default_min_severity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_logging_config() {
        let config = LoggingConfig::default();
        assert!(config.enabled);
        assert_eq!(config.min_severity, Severity::Warn);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: LoggingConfig = serde_json::from_str(r#"{"min_severity": "TRACE"}"#).unwrap();
        assert!(config.enabled);
        assert_eq!(config.min_severity, Severity::Trace);
    }
}
