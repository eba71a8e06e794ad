//! GROUP BY and aggregation
//!
//! Rows are partitioned recursively, one group key at a time. Buckets are
//! emitted in the order their key value was first seen. Each leaf bucket
//! collapses to its first row, with aggregate columns written onto it.

use std::collections::HashMap;

use crate::columns::Column;
use crate::value::{GroupKey, Row};

/// Parses a GROUP BY clause into trimmed keys. Empty terms are skipped.
pub fn parse_group_keys(clause: &str) -> Vec<String> {
    clause
        .split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .collect()
}

/// Groups rows by `keys` and evaluates aggregate columns per group
pub fn group_rows(rows: Vec<Row>, keys: &[String], columns: &[Column]) -> Vec<Row> {
    let Some((key, remaining)) = keys.split_first() else {
        return aggregate_bucket(rows, columns).into_iter().collect();
    };

    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    let mut buckets: Vec<Vec<Row>> = Vec::new();
    for row in rows {
        let group_key = GroupKey::from(row.value(key));
        let slot = *index.entry(group_key).or_insert_with(|| {
            buckets.push(Vec::new());
            buckets.len() - 1
        });
        buckets[slot].push(row);
    }

    buckets
        .into_iter()
        .flat_map(|bucket| group_rows(bucket, remaining, columns))
        .collect()
}

/// Collapses a bucket to its first row, writing each aggregate over the
/// whole bucket under the column label.
fn aggregate_bucket(rows: Vec<Row>, columns: &[Column]) -> Option<Row> {
    let mut representative = rows.first()?.clone();
    for column in columns {
        if let Some(value) = column.evaluate(&rows) {
            representative.insert(column.label(), value);
        }
    }
    Some(representative)
}
