//! Query execution
//!
//! A query is a set of clause texts applied to rows in a fixed order:
//!
//! 1. WHERE keeps rows matching the filter
//! 2. GROUP BY collapses each group to one row and writes aggregates
//! 3. ORDER BY sorts, stably, on one or more keys
//! 4. OFFSET drops leading rows
//! 5. LIMIT keeps leading rows
//! 6. SELECT projects each row onto the selected labels
//!
//! Absent or blank clauses pass rows through unchanged.

mod config;
mod executor;
mod grouping;
mod paging;
mod query;
mod sorter;

pub use config::ExecutorConfig;
pub use executor::QueryExecutor;
pub use grouping::{group_rows, parse_group_keys};
pub use paging::{apply_limit, apply_offset, parse_count};
pub use query::Query;
pub use sorter::{sort_rows, Order, SortDirection};
