//! Query clause object
//!
//! Splitting a full statement into clauses is left to the caller. This
//! type carries the clause texts, each optional, and can be decoded from
//! JSON such as:
//!
//! ```json
//! {"select": "team, sum(points)", "where": "season = 2024",
//!  "group_by": "team", "order_by": "team desc", "limit": 10}
//! ```

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::QueryResult;

/// The clauses of one query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    select: Option<String>,

    #[serde(default, rename = "where", skip_serializing_if = "Option::is_none")]
    where_clause: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    group_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    order_by: Option<String>,

    #[serde(default, deserialize_with = "count_clause", skip_serializing_if = "Option::is_none")]
    limit: Option<String>,

    #[serde(default, deserialize_with = "count_clause", skip_serializing_if = "Option::is_none")]
    offset: Option<String>,
}

/// Accepts a count clause as either a JSON string or number
fn count_clause<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string or number, found {}",
            other
        ))),
    }
}

/// A clause counts as absent when missing or blank
fn clause(text: &Option<String>) -> Option<&str> {
    text.as_deref().map(str::trim).filter(|t| !t.is_empty())
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a query from its JSON form
    pub fn from_json(text: &str) -> QueryResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn with_select(mut self, select: impl Into<String>) -> Self {
        self.select = Some(select.into());
        self
    }

    pub fn with_where(mut self, condition: impl Into<String>) -> Self {
        self.where_clause = Some(condition.into());
        self
    }

    pub fn with_group_by(mut self, keys: impl Into<String>) -> Self {
        self.group_by = Some(keys.into());
        self
    }

    pub fn with_order_by(mut self, orders: impl Into<String>) -> Self {
        self.order_by = Some(orders.into());
        self
    }

    pub fn with_limit(mut self, limit: impl ToString) -> Self {
        self.limit = Some(limit.to_string());
        self
    }

    pub fn with_offset(mut self, offset: impl ToString) -> Self {
        self.offset = Some(offset.to_string());
        self
    }

    pub fn select(&self) -> Option<&str> {
        clause(&self.select)
    }

    pub fn where_clause(&self) -> Option<&str> {
        clause(&self.where_clause)
    }

    pub fn group_by(&self) -> Option<&str> {
        clause(&self.group_by)
    }

    pub fn order_by(&self) -> Option<&str> {
        clause(&self.order_by)
    }

    pub fn limit(&self) -> Option<&str> {
        clause(&self.limit)
    }

    pub fn offset(&self) -> Option<&str> {
        clause(&self.offset)
    }
}
