//! Filter tree
//!
//! A filter is either a column comparison or an AND/OR pair of filters.
//! Trees are built once per query and evaluated row by row.

use std::fmt;

use super::comparison::{cast_literal, ComparisonOp};
use crate::value::{Row, Scalar};

/// Boolean connector of a compound filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    And,
    Or,
}

impl Connector {
    pub fn as_str(&self) -> &'static str {
        match self {
            Connector::And => "AND",
            Connector::Or => "OR",
        }
    }
}

/// Compares one column against a literal.
///
/// The literal starts out as raw text and is cast once, against the
/// variant of the first row value it meets. The cast is sticky: later
/// rows never re-cast it, even if their value has another variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnValueFilter {
    column: String,
    op: ComparisonOp,
    text: String,
    cast: Option<Scalar>,
}

impl ColumnValueFilter {
    pub fn new(column: impl Into<String>, op: ComparisonOp, text: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            op,
            text: text.into(),
            cast: None,
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn op(&self) -> ComparisonOp {
        self.op
    }

    /// Literal text as written in the condition
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The cast literal, once a row has been evaluated
    pub fn resolved(&self) -> Option<&Scalar> {
        self.cast.as_ref()
    }

    pub fn matches(&mut self, row: &Row) -> bool {
        let value = row.value(&self.column);
        let literal = self
            .cast
            .get_or_insert_with(|| cast_literal(value, &self.text));
        self.op.evaluate(value, literal)
    }
}

/// Two filters joined by AND or OR
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundFilter {
    left: Box<Filter>,
    right: Box<Filter>,
    connector: Connector,
}

impl CompoundFilter {
    pub fn new(left: Filter, right: Filter, connector: Connector) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
            connector,
        }
    }

    pub fn left(&self) -> &Filter {
        &self.left
    }

    pub fn right(&self) -> &Filter {
        &self.right
    }

    pub fn connector(&self) -> Connector {
        self.connector
    }

    pub fn matches(&mut self, row: &Row) -> bool {
        match self.connector {
            Connector::And => self.left.matches(row) && self.right.matches(row),
            Connector::Or => self.left.matches(row) || self.right.matches(row),
        }
    }
}

/// Boolean predicate over rows
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Comparison(ColumnValueFilter),
    Compound(CompoundFilter),
}

impl Filter {
    pub fn comparison(column: impl Into<String>, op: ComparisonOp, text: impl Into<String>) -> Self {
        Filter::Comparison(ColumnValueFilter::new(column, op, text))
    }

    pub fn compound(left: Filter, right: Filter, connector: Connector) -> Self {
        Filter::Compound(CompoundFilter::new(left, right, connector))
    }

    /// Evaluates the filter. Takes `&mut self` because comparison
    /// literals are cast on first use.
    pub fn matches(&mut self, row: &Row) -> bool {
        match self {
            Filter::Comparison(filter) => filter.matches(row),
            Filter::Compound(filter) => filter.matches(row),
        }
    }

    pub fn as_comparison(&self) -> Option<&ColumnValueFilter> {
        match self {
            Filter::Comparison(filter) => Some(filter),
            Filter::Compound(_) => None,
        }
    }

    pub fn as_compound(&self) -> Option<&CompoundFilter> {
        match self {
            Filter::Compound(filter) => Some(filter),
            Filter::Comparison(_) => None,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Comparison(c) => write!(f, "{} {} {}", c.column, c.op, c.text),
            Filter::Compound(c) => write!(f, "({} {} {})", c.left, c.connector.as_str(), c.right),
        }
    }
}
