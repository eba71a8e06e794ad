//! Aggregate evaluators
//!
//! Aggregates never fail: values without a numeric reading add nothing to
//! a sum, and null or incomparable values are skipped by max.

use std::cmp::Ordering;

use crate::value::{Row, Scalar};

/// Sums a column over rows. Always a float, 0.0 for no rows.
pub fn sum(rows: &[Row], column: &str) -> Scalar {
    let total = rows
        .iter()
        .filter_map(|row| row.value(column).to_f64())
        .sum::<f64>();
    Scalar::Float(total)
}

/// Maximum of a column over rows, null when no row has a value
pub fn max(rows: &[Row], column: &str) -> Scalar {
    let mut best: Option<&Scalar> = None;
    for value in rows.iter().map(|row| row.value(column)) {
        if value.is_null() {
            continue;
        }
        best = match best {
            None => Some(value),
            Some(current) if value.partial_cmp(current) == Some(Ordering::Greater) => Some(value),
            keep => keep,
        };
    }
    best.cloned().unwrap_or(Scalar::Null)
}
