//! Filter subsystem
//!
//! Parses WHERE clauses into filter trees and evaluates them against rows.
//!
//! # Grammar
//!
//! ```text
//! condition  := comparison | condition "and" condition
//!             | condition "or" condition | "(" condition ")"
//! comparison := <column> <op> <literal>
//! op         := "=" | "!=" | "<" | "<=" | ">" | ">="
//! ```
//!
//! Connectors are case-insensitive. Literals are untyped text until first
//! compared, when they are cast to the type of the row value they meet.

mod ast;
mod comparison;
mod parser;

pub use ast::{ColumnValueFilter, CompoundFilter, Connector, Filter};
pub use comparison::{cast_literal, ComparisonOp};
pub use parser::parse_where;
