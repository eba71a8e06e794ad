//! WHERE clause parser
//!
//! The grammar is scanned textually rather than tokenized:
//!
//! 1. A parenthesized group is parsed on its own and joined to the rest of
//!    the fragment through an adjoining AND/OR connector.
//! 2. Without parentheses, the first AND splits the fragment, even when an
//!    OR appears earlier. `a or b and c` parses as `(a or b) and c`.
//! 3. Otherwise the first OR splits the fragment.
//! 4. Otherwise the fragment is a single comparison.
//!
//! Only one level of parentheses is supported. Nested groups and
//! unbalanced parentheses are rejected as syntax errors.

use std::sync::OnceLock;

use regex::Regex;

use super::ast::{Connector, Filter};
use super::comparison::ComparisonOp;
use crate::errors::{QueryError, QueryResult};

struct ConnectorPatterns {
    and_split: Regex,
    or_split: Regex,
    leading_and: Regex,
    leading_or: Regex,
    trailing_and: Regex,
    trailing_or: Regex,
}

static PATTERNS: OnceLock<ConnectorPatterns> = OnceLock::new();

fn patterns() -> &'static ConnectorPatterns {
    PATTERNS.get_or_init(|| {
        let compile = |pattern: &str| Regex::new(pattern).expect("connector pattern is valid");
        ConnectorPatterns {
            and_split: compile(r"(?i)\sand\s"),
            or_split: compile(r"(?i)\sor\s"),
            leading_and: compile(r"(?i)^\s*and\s"),
            leading_or: compile(r"(?i)^\s*or\s"),
            trailing_and: compile(r"(?i)\sand\s*$"),
            trailing_or: compile(r"(?i)\sor\s*$"),
        }
    })
}

/// Parses a WHERE clause.
///
/// Returns `Ok(None)` for an empty or blank clause.
pub fn parse_where(text: &str) -> QueryResult<Option<Filter>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_condition(text).map(Some)
}

fn parse_condition(fragment: &str) -> QueryResult<Filter> {
    if let Some(group) = find_group(fragment)? {
        return parse_group(&group);
    }

    let patterns = patterns();

    // AND is checked before OR across the whole fragment
    if let Some(m) = patterns.and_split.find(fragment) {
        return join(&fragment[..m.start()], &fragment[m.end()..], Connector::And);
    }
    if let Some(m) = patterns.or_split.find(fragment) {
        return join(&fragment[..m.start()], &fragment[m.end()..], Connector::Or);
    }

    parse_comparison(fragment)
}

fn join(left: &str, right: &str, connector: Connector) -> QueryResult<Filter> {
    Ok(Filter::compound(
        parse_condition(left)?,
        parse_condition(right)?,
        connector,
    ))
}

/// A parenthesized span and the fragment text left once it is removed
struct Group<'a> {
    inner: &'a str,
    rest: String,
}

/// Locates the first group: the first `(` up to the first `)` after it.
fn find_group(fragment: &str) -> QueryResult<Option<Group<'_>>> {
    match (fragment.find('('), fragment.find(')')) {
        (None, None) => Ok(None),
        (Some(open), Some(close)) if open < close => {
            let inner = &fragment[open + 1..close];
            if inner.contains('(') {
                return Err(QueryError::unsupported_parentheses(
                    fragment,
                    "nested parentheses are not supported",
                ));
            }
            let rest = format!("{}{}", &fragment[..open], &fragment[close + 1..]);
            Ok(Some(Group { inner, rest }))
        }
        (Some(_), None) => Err(QueryError::unsupported_parentheses(
            fragment,
            "unclosed parenthesis",
        )),
        _ => Err(QueryError::unsupported_parentheses(
            fragment,
            "unmatched closing parenthesis",
        )),
    }
}

fn parse_group(group: &Group<'_>) -> QueryResult<Filter> {
    let patterns = patterns();
    let rest = group.rest.as_str();

    if let Some(m) = patterns.leading_and.find(rest) {
        return join(group.inner, &rest[m.end()..], Connector::And);
    }
    if let Some(m) = patterns.leading_or.find(rest) {
        return join(group.inner, &rest[m.end()..], Connector::Or);
    }
    if let Some(m) = patterns.trailing_and.find(rest) {
        return join(&rest[..m.start()], group.inner, Connector::And);
    }
    if let Some(m) = patterns.trailing_or.find(rest) {
        return join(&rest[..m.start()], group.inner, Connector::Or);
    }

    // No adjoining connector: the group stands alone
    parse_condition(group.inner)
}

fn parse_comparison(fragment: &str) -> QueryResult<Filter> {
    let op = ComparisonOp::scan(fragment).ok_or_else(|| QueryError::no_operator(fragment))?;
    let (column, literal) = fragment
        .split_once(op.symbol())
        .ok_or_else(|| QueryError::no_operator(fragment))?;
    Ok(Filter::comparison(column.trim(), op, literal.trim()))
}
