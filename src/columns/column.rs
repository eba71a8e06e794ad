//! Plain and aggregate columns

use std::sync::OnceLock;

use regex::Regex;

use super::aggregate;
use crate::value::{Row, Scalar};

/// How a column produces its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Passes the row value through
    Plain,
    /// Sum over a set of rows
    Sum,
    /// Maximum over a set of rows
    Max,
}

/// A named projection or aggregation over rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    source: String,
    label: String,
    kind: ColumnKind,
}

static SUM_PATTERN: OnceLock<Regex> = OnceLock::new();
static MAX_PATTERN: OnceLock<Regex> = OnceLock::new();

fn sum_pattern() -> &'static Regex {
    SUM_PATTERN.get_or_init(|| Regex::new(r"(?i)sum\((.*)\)").expect("sum pattern is valid"))
}

fn max_pattern() -> &'static Regex {
    MAX_PATTERN.get_or_init(|| Regex::new(r"(?i)max\((.*)\)").expect("max pattern is valid"))
}

impl Column {
    pub fn plain(name: &str) -> Self {
        let name = name.trim();
        Self {
            source: name.to_string(),
            label: name.to_string(),
            kind: ColumnKind::Plain,
        }
    }

    pub fn aggregate(kind: ColumnKind, source: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            label: label.into(),
            kind,
        }
    }

    /// Builds a column from a select expression.
    ///
    /// `sum(x)` and `max(x)` (any case) become aggregates over `x`, labelled
    /// with the expression text verbatim. Anything else is a plain column.
    pub fn parse(expression: &str) -> Self {
        for (kind, pattern) in [(ColumnKind::Sum, sum_pattern()), (ColumnKind::Max, max_pattern())] {
            if let Some(inner) = pattern.captures(expression).and_then(|c| c.get(1)) {
                return Self::aggregate(kind, inner.as_str(), expression);
            }
        }
        Self::plain(expression)
    }

    /// Column the value is read from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Field name the value is written under
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    pub fn is_aggregate(&self) -> bool {
        self.kind != ColumnKind::Plain
    }

    /// Evaluates an aggregate over a set of rows.
    ///
    /// Plain columns have no aggregate evaluator and return `None`.
    pub fn evaluate(&self, rows: &[Row]) -> Option<Scalar> {
        match self.kind {
            ColumnKind::Plain => None,
            ColumnKind::Sum => Some(aggregate::sum(rows, &self.source)),
            ColumnKind::Max => Some(aggregate::max(rows, &self.source)),
        }
    }
}
