//! Row ordering
//!
//! Multi-key, stable. Nulls (absent fields included) sort last under
//! ascending order and first under descending order. Values of different
//! variants rank by variant, so every column has a total order.

use std::cmp::Ordering;
use std::fmt;

use crate::value::Row;

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Unrecognized tokens fall back to ascending
    pub fn from_token(token: &str) -> Self {
        match token.to_lowercase().as_str() {
            "desc" => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }
}

/// One ORDER BY term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    column: String,
    direction: SortDirection,
}

impl Order {
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }

    pub fn asc(column: impl Into<String>) -> Self {
        Self::new(column, SortDirection::Asc)
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self::new(column, SortDirection::Desc)
    }

    /// Parses `"<column> [asc|desc], ..."`. Empty terms are skipped.
    pub fn parse_list(clause: &str) -> Vec<Order> {
        clause
            .split(',')
            .filter_map(|term| {
                let mut parts = term.split_whitespace();
                let column = parts.next()?;
                let direction = parts
                    .next()
                    .map(SortDirection::from_token)
                    .unwrap_or_default();
                Some(Order::new(column, direction))
            })
            .collect()
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Compares two rows on this term's column
    pub fn compare(&self, left: &Row, right: &Row) -> Ordering {
        let a = left.value(&self.column);
        let b = right.value(&self.column);

        let ordering = match (a.is_null(), b.is_null()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => a.sort_cmp(b),
        };

        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.column, self.direction.as_str())
    }
}

/// Sorts rows by each order in turn. Rows equal on every key keep their
/// input order.
pub fn sort_rows(rows: &mut [Row], orders: &[Order]) {
    if orders.is_empty() {
        return;
    }
    rows.sort_by(|a, b| {
        orders
            .iter()
            .map(|order| order.compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Scalar;

    fn row(pairs: &[(&str, i64)]) -> Row {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    #[test]
    fn test_compare_ascending() {
        let order = Order::asc("col");
        assert_eq!(
            order.compare(&row(&[("col", 7)]), &row(&[("col", 9)])),
            Ordering::Less
        );
    }

    #[test]
    fn test_compare_descending() {
        let order = Order::desc("col");
        assert_eq!(
            order.compare(&row(&[("col", 7)]), &row(&[("col", 9)])),
            Ordering::Greater
        );
    }

    #[test]
    fn test_compare_equal() {
        let order = Order::desc("col");
        assert_eq!(
            order.compare(&row(&[("col", 7)]), &row(&[("col", 7)])),
            Ordering::Equal
        );
    }

    #[test]
    fn test_compare_missing_column() {
        let order = Order::desc("col");
        assert_eq!(
            order.compare(&row(&[("a", 7)]), &row(&[("a", 7)])),
            Ordering::Equal
        );
    }

    #[test]
    fn test_nulls_sort_last_ascending() {
        let order = Order::asc("col");
        let null_row: Row = [("col", Scalar::Null)].into_iter().collect();
        assert_eq!(order.compare(&null_row, &row(&[("col", 1)])), Ordering::Greater);
        assert_eq!(order.compare(&row(&[("col", 1)]), &row(&[])), Ordering::Less);

        let order = Order::desc("col");
        assert_eq!(order.compare(&null_row, &row(&[("col", 1)])), Ordering::Less);
    }

    #[test]
    fn test_mixed_variants_rank_by_variant() {
        let order = Order::asc("col");
        let text: Row = [("col", "a")].into_iter().collect();
        assert_eq!(order.compare(&row(&[("col", 1)]), &text), Ordering::Less);
        assert_eq!(order.compare(&text, &row(&[("col", 0)])), Ordering::Greater);

        let nan: Row = [("col", f64::NAN)].into_iter().collect();
        assert_eq!(order.compare(&nan, &row(&[("col", 9)])), Ordering::Greater);
        assert_eq!(order.compare(&nan, &nan), Ordering::Equal);
    }

    #[test]
    fn test_sort_mixed_column() {
        let values = [
            Scalar::Str("b".into()),
            Scalar::Int(3),
            Scalar::Float(f64::NAN),
            Scalar::Null,
            Scalar::Str("a".into()),
            Scalar::Float(1.5),
            Scalar::Int(-2),
        ];
        let mut rows: Vec<Row> = (0..60)
            .map(|i| {
                [("col", values[(i * 7 + i / 3) % values.len()].clone())]
                    .into_iter()
                    .collect()
            })
            .collect();
        sort_rows(&mut rows, &[Order::asc("col")]);

        let ranks: Vec<u8> = rows
            .iter()
            .map(|r| match r.value("col") {
                Scalar::Int(_) | Scalar::Float(_) => 0,
                Scalar::Str(_) => 1,
                _ => 2,
            })
            .collect();
        assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
        assert!(rows.last().unwrap().value("col").is_null());
    }

    #[test]
    fn test_display() {
        assert_eq!(Order::desc("a").to_string(), "a desc");
        assert_eq!(Order::parse_list("b").first().unwrap().to_string(), "b asc");
    }

    #[test]
    fn test_parse_list() {
        let orders = Order::parse_list(" a deSc, b,c asc ,, d sideways");
        assert_eq!(
            orders,
            vec![
                Order::desc("a"),
                Order::asc("b"),
                Order::asc("c"),
                Order::asc("d"),
            ]
        );
    }

    #[test]
    fn test_sort_multiple_keys() {
        let mut rows = vec![
            row(&[("a", 5), ("b", 2)]),
            row(&[("a", 5), ("b", 3)]),
            row(&[("a", 4), ("b", 1)]),
        ];
        sort_rows(&mut rows, &Order::parse_list("a, b"));
        let bs: Vec<_> = rows.iter().map(|r| r.value("b").clone()).collect();
        assert_eq!(bs, vec![Scalar::Int(1), Scalar::Int(2), Scalar::Int(3)]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut rows = vec![
            row(&[("k", 1), ("id", 1)]),
            row(&[("k", 0), ("id", 2)]),
            row(&[("k", 1), ("id", 3)]),
            row(&[("k", 0), ("id", 4)]),
        ];
        sort_rows(&mut rows, &[Order::asc("k")]);
        let ids: Vec<_> = rows.iter().map(|r| r.value("id").clone()).collect();
        assert_eq!(
            ids,
            vec![Scalar::Int(2), Scalar::Int(4), Scalar::Int(1), Scalar::Int(3)]
        );
    }
}
