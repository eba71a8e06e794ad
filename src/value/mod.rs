//! Scalar and row model
//!
//! Rows are ordered name -> scalar mappings. Scalars are a tagged union
//! over null, boolean, integer, float, string and timestamp values.

mod row;
mod scalar;

pub use row::{rows_from_json, Row};
pub use scalar::{parse_timestamp, Scalar, TIMESTAMP_FORMAT};

use chrono::{DateTime, Utc};

/// Hashable identity of a scalar, used to bucket rows.
///
/// Unlike `Scalar` equality, `Int(1)` and `Float(1.0)` are distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    Null,
    Bool(bool),
    Int(i64),
    Float(u64),
    Str(String),
    Timestamp(DateTime<Utc>),
}

impl From<&Scalar> for GroupKey {
    fn from(value: &Scalar) -> Self {
        match value {
            Scalar::Null => GroupKey::Null,
            Scalar::Bool(b) => GroupKey::Bool(*b),
            Scalar::Int(i) => GroupKey::Int(*i),
            // -0.0 and 0.0 are one key
            Scalar::Float(f) if *f == 0.0 => GroupKey::Float(0.0f64.to_bits()),
            Scalar::Float(f) => GroupKey::Float(f.to_bits()),
            Scalar::Str(s) => GroupKey::Str(s.clone()),
            Scalar::Timestamp(ts) => GroupKey::Timestamp(*ts),
        }
    }
}
