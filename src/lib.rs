//! rowquery - a small in-memory query engine
//!
//! Parses a boolean WHERE grammar and runs a fixed pipeline over rows:
//! filter, group/aggregate, order, offset, limit, project.

pub mod columns;
pub mod errors;
pub mod executor;
pub mod filter;
pub mod observability;
pub mod value;

pub use columns::{Column, ColumnKind, Selection};
pub use errors::{QueryError, QueryResult};
pub use executor::{ExecutorConfig, Order, Query, QueryExecutor, SortDirection};
pub use filter::{parse_where, ComparisonOp, Filter};
pub use observability::{LoggingConfig, Severity};
pub use value::{rows_from_json, Row, Scalar};
