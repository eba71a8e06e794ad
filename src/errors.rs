//! Query error types
//!
//! Error codes:
//! - QUERY_CONDITION_SYNTAX (aborts the query)
//! - QUERY_INVALID_DOCUMENT
//! - QUERY_INVALID_ROWS
//! - QUERY_INVALID_CONFIG

use thiserror::Error;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised while parsing or executing a query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A WHERE fragment could not be understood
    #[error("Unable to understand condition: {0}")]
    ConditionSyntax(String),

    /// A serialized query could not be decoded
    #[error("Invalid query document: {0}")]
    InvalidDocument(String),

    /// Input rows were not in row shape
    #[error("Invalid rows: {0}")]
    InvalidRows(String),

    /// Executor configuration could not be decoded
    #[error("Invalid executor configuration: {0}")]
    InvalidConfig(String),
}

impl QueryError {
    /// Condition without a recognized operator
    pub fn no_operator(fragment: &str) -> Self {
        QueryError::ConditionSyntax(fragment.trim().to_string())
    }

    /// Parentheses that the single-level grammar cannot express
    pub fn unsupported_parentheses(fragment: &str, reason: &str) -> Self {
        QueryError::ConditionSyntax(format!("{} ({})", fragment.trim(), reason))
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::ConditionSyntax(_) => "QUERY_CONDITION_SYNTAX",
            QueryError::InvalidDocument(_) => "QUERY_INVALID_DOCUMENT",
            QueryError::InvalidRows(_) => "QUERY_INVALID_ROWS",
            QueryError::InvalidConfig(_) => "QUERY_INVALID_CONFIG",
        }
    }

    /// Returns true for WHERE syntax failures
    pub fn is_syntax_error(&self) -> bool {
        matches!(self, QueryError::ConditionSyntax(_))
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        QueryError::InvalidDocument(err.to_string())
    }
}
