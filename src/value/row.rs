//! Row container
//!
//! A row is an insertion-ordered mapping from column name to scalar.
//! Keys are normalized to their string form when the row is built.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use super::scalar::Scalar;
use crate::errors::{QueryError, QueryResult};

static NULL: Scalar = Scalar::Null;

/// One record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: Vec<(String, Scalar)>,
}

impl Row {
    /// Creates an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a row from a JSON object.
    ///
    /// Field order follows the iteration order of the JSON map.
    pub fn from_json(value: &Value) -> QueryResult<Self> {
        match value {
            Value::Object(map) => Ok(map
                .iter()
                .map(|(key, value)| (key.as_str(), Scalar::from(value)))
                .collect()),
            other => Err(QueryError::InvalidRows(format!(
                "expected an object, found {}",
                json_kind(other)
            ))),
        }
    }

    /// Returns the value for a column, if present
    pub fn get(&self, column: &str) -> Option<&Scalar> {
        self.fields
            .iter()
            .find(|(key, _)| key == column)
            .map(|(_, value)| value)
    }

    /// Returns the value for a column, treating absence as null
    pub fn value(&self, column: &str) -> &Scalar {
        self.get(column).unwrap_or(&NULL)
    }

    /// Sets a column, overwriting in place or appending a new field
    pub fn insert(&mut self, column: impl ToString, value: impl Into<Scalar>) {
        let column = column.to_string();
        let value = value.into();
        match self.fields.iter_mut().find(|(key, _)| *key == column) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((column, value)),
        }
    }

    pub fn contains_key(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    /// Column names in field order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    /// Fields in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Keeps only the fields accepted by the predicate, preserving order
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &Scalar) -> bool) {
        self.fields.retain(|(key, value)| keep(key, value));
    }
}

impl<K: ToString, V: Into<Scalar>> FromIterator<(K, V)> for Row {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut row = Row::new();
        for (key, value) in iter {
            row.insert(key, value);
        }
        row
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Builds rows from a JSON array of objects. `null` gives no rows.
pub fn rows_from_json(value: &Value) -> QueryResult<Vec<Row>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items.iter().map(Row::from_json).collect(),
        other => Err(QueryError::InvalidRows(format!(
            "expected an array of objects, found {}",
            json_kind(other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_keys_normalized_to_strings() {
        let row: Row = vec![(1, Scalar::Int(10)), (2, Scalar::Int(20))]
            .into_iter()
            .collect();
        assert_eq!(row.keys().collect::<Vec<_>>(), vec!["1", "2"]);
        assert_eq!(row.get("1"), Some(&Scalar::Int(10)));
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut row: Row = [("a", 1), ("b", 2)].into_iter().collect();
        row.insert("a", 5);
        row.insert("c", 3);
        assert_eq!(row.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(row.value("a"), &Scalar::Int(5));
    }

    #[test]
    fn test_absent_value_is_null() {
        let row: Row = [("a", 1)].into_iter().collect();
        assert!(row.value("missing").is_null());
        assert!(!row.contains_key("missing"));
    }

    #[test]
    fn test_from_json_object() {
        let row = Row::from_json(&json!({"name": "Alice", "age": 30})).unwrap();
        assert_eq!(row.len(), 2);
        assert_eq!(row.value("age"), &Scalar::Int(30));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let err = Row::from_json(&json!([1, 2])).unwrap_err();
        assert_eq!(err.code(), "QUERY_INVALID_ROWS");

        let err = rows_from_json(&json!({"a": 1})).unwrap_err();
        assert!(err.to_string().contains("object"));
    }

    #[test]
    fn test_from_json_text_keeps_field_order() {
        let value: Value = serde_json::from_str(r#"[{"b": 2, "a": 1, "c": 3}]"#).unwrap();
        let rows = rows_from_json(&value).unwrap();
        assert_eq!(rows[0].keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);

        let pairs: Vec<(&str, &Scalar)> = rows[0].iter().collect();
        assert_eq!(pairs[0], ("b", &Scalar::Int(2)));
    }

    #[test]
    fn test_null_document_is_no_rows() {
        assert!(rows_from_json(&Value::Null).unwrap().is_empty());
    }

    #[test]
    fn test_serializes_in_field_order() {
        let row: Row = [("b", 2), ("a", 1)].into_iter().collect();
        let encoded = serde_json::to_string(&row).unwrap();
        assert_eq!(encoded, r#"{"b":2,"a":1}"#);
    }

    #[test]
    fn test_retain_preserves_order() {
        let mut row: Row = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        row.retain(|key, _| key != "b");
        assert_eq!(row.keys().collect::<Vec<_>>(), vec!["a", "c"]);
    }
}
