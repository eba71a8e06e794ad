//! Query executor
//!
//! Runs one query over a row set. Stage order is fixed:
//! 1. Empty input returns immediately
//! 2. Parse the select list
//! 3. WHERE filter
//! 4. GROUP BY with aggregation
//! 5. ORDER BY
//! 6. OFFSET
//! 7. LIMIT
//! 8. Projection

use serde_json::Value;

use crate::columns::Selection;
use crate::errors::QueryResult;
use crate::filter::parse_where;
use crate::observability::{Logger, ObservationScope};
use crate::value::{rows_from_json, Row};

use super::config::ExecutorConfig;
use super::grouping::{group_rows, parse_group_keys};
use super::paging::{apply_limit, apply_offset, parse_count};
use super::query::Query;
use super::sorter::{sort_rows, Order};

const SCOPE_NAME: &str = "QUERY_EXECUTE";

/// Executes queries over in-memory rows.
///
/// Holds no per-query state, so one executor can serve any number of
/// threads. Filters, columns and orders are built fresh for every call.
#[derive(Debug, Clone, Default)]
pub struct QueryExecutor {
    config: ExecutorConfig,
    logger: Logger,
}

impl QueryExecutor {
    /// Creates an executor with the default configuration
    pub fn new() -> Self {
        Self::with_config(ExecutorConfig::default())
    }

    pub fn with_config(config: ExecutorConfig) -> Self {
        let logger = Logger::new(&config.logging);
        Self { config, logger }
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Runs `query` over `rows`.
    ///
    /// Only a malformed WHERE clause fails. Every other clause is read
    /// permissively.
    pub fn execute<I>(&self, rows: I, query: &Query) -> QueryResult<Vec<Row>>
    where
        I: IntoIterator<Item = Row>,
    {
        let mut rows: Vec<Row> = rows.into_iter().collect();
        if rows.is_empty() {
            return Ok(rows);
        }

        let rows_in = rows.len().to_string();
        let scope =
            ObservationScope::begin(&self.logger, SCOPE_NAME, &[("rows_in", rows_in.as_str())]);

        let selection = Selection::parse(query.select());

        if let Some(clause) = query.where_clause() {
            let mut filter = match parse_where(clause) {
                Ok(filter) => filter,
                Err(err) => {
                    scope.fail(&err);
                    return Err(err);
                }
            };
            if let Some(filter) = filter.as_mut() {
                rows.retain(|row| filter.matches(row));
                let rendered = filter.to_string();
                let count = rows.len().to_string();
                scope.step("WHERE", &[("filter", rendered.as_str()), ("rows", count.as_str())]);
            }
        }

        if let Some(clause) = query.group_by() {
            let keys = parse_group_keys(clause);
            if !keys.is_empty() {
                rows = group_rows(rows, &keys, selection.columns());
                stage(&scope, "GROUP_BY", rows.len());
            }
        }

        if let Some(clause) = query.order_by() {
            let orders = Order::parse_list(clause);
            sort_rows(&mut rows, &orders);
            let rendered = orders.iter().map(Order::to_string).collect::<Vec<_>>().join(", ");
            let count = rows.len().to_string();
            scope.step("ORDER_BY", &[("orders", rendered.as_str()), ("rows", count.as_str())]);
        }

        if let Some(clause) = query.offset() {
            rows = apply_offset(rows, parse_count(clause));
            stage(&scope, "OFFSET", rows.len());
        }

        if let Some(clause) = query.limit() {
            rows = apply_limit(rows, parse_count(clause));
            stage(&scope, "LIMIT", rows.len());
        }

        let rows = selection.project(rows);

        let rows_out = rows.len().to_string();
        scope.complete(&[("rows_out", rows_out.as_str())]);
        Ok(rows)
    }

    /// Runs `query` over a JSON array of objects. `null` counts as no rows.
    pub fn execute_json(&self, rows: &Value, query: &Query) -> QueryResult<Vec<Row>> {
        self.execute(rows_from_json(rows)?, query)
    }
}

fn stage(scope: &ObservationScope<'_>, name: &str, rows: usize) {
    let rows = rows.to_string();
    scope.step(name, &[("rows", rows.as_str())]);
}
