//! Executor configuration

use serde::{Deserialize, Serialize};

use crate::errors::{QueryError, QueryResult};
use crate::observability::{LoggingConfig, Severity};

/// Configuration for a `QueryExecutor`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutorConfig {
    /// Log output settings (default: enabled at WARN)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ExecutorConfig {
    /// Decodes a configuration from JSON. Missing fields take defaults.
    pub fn from_json(text: &str) -> QueryResult<Self> {
        serde_json::from_str(text).map_err(|e| QueryError::InvalidConfig(e.to_string()))
    }

    /// Config with every log line suppressed
    pub fn silent() -> Self {
        Self {
            logging: LoggingConfig {
                enabled: false,
                ..LoggingConfig::default()
            },
        }
    }

    /// Config logging at the given severity and above
    pub fn with_min_severity(severity: Severity) -> Self {
        Self {
            logging: LoggingConfig {
                enabled: true,
                min_severity: severity,
            },
        }
    }
}
