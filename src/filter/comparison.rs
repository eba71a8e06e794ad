//! Comparison operators and literal casting

use std::fmt;

use crate::value::{parse_timestamp, Scalar};

/// Comparison operators of the WHERE grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl ComparisonOp {
    /// Operators in scan order. A later match overwrites an earlier one, so
    /// each compound operator follows the simple operators it contains.
    pub const SCAN_ORDER: [ComparisonOp; 6] = [
        ComparisonOp::Eq,
        ComparisonOp::NotEq,
        ComparisonOp::Lt,
        ComparisonOp::LtEq,
        ComparisonOp::Gt,
        ComparisonOp::GtEq,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOp::Eq => "=",
            ComparisonOp::NotEq => "!=",
            ComparisonOp::Lt => "<",
            ComparisonOp::LtEq => "<=",
            ComparisonOp::Gt => ">",
            ComparisonOp::GtEq => ">=",
        }
    }

    /// Finds the operator of a leaf fragment: the last operator in scan
    /// order whose symbol occurs anywhere in the text.
    pub fn scan(fragment: &str) -> Option<ComparisonOp> {
        Self::SCAN_ORDER
            .iter()
            .copied()
            .filter(|op| fragment.contains(op.symbol()))
            .last()
    }

    /// Applies the operator. Ordering between incomparable values is false.
    pub fn evaluate(&self, left: &Scalar, right: &Scalar) -> bool {
        match self {
            ComparisonOp::Eq => left == right,
            ComparisonOp::NotEq => left != right,
            ComparisonOp::Lt => left < right,
            ComparisonOp::LtEq => left <= right,
            ComparisonOp::Gt => left > right,
            ComparisonOp::GtEq => left >= right,
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Casts literal text to the variant of a sample row value.
///
/// Integer and float samples cast when the literal parses as that type,
/// timestamp samples cast when the literal parses as a timestamp. Every
/// other case keeps the literal as a string.
pub fn cast_literal(sample: &Scalar, text: &str) -> Scalar {
    let cast = match sample {
        Scalar::Int(_) => text.parse::<i64>().ok().map(Scalar::Int),
        Scalar::Float(_) => text.parse::<f64>().ok().map(Scalar::Float),
        Scalar::Timestamp(_) => parse_timestamp(text).map(Scalar::Timestamp),
        _ => None,
    };
    cast.unwrap_or_else(|| Scalar::Str(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_scan_prefers_compound_operators() {
        assert_eq!(ComparisonOp::scan("age <= 25"), Some(ComparisonOp::LtEq));
        assert_eq!(ComparisonOp::scan("age >= 25"), Some(ComparisonOp::GtEq));
        assert_eq!(ComparisonOp::scan("age != 25"), Some(ComparisonOp::NotEq));
        assert_eq!(ComparisonOp::scan("age < 25"), Some(ComparisonOp::Lt));
        assert_eq!(ComparisonOp::scan("age 25"), None);
    }

    #[test]
    fn test_scan_last_match_wins() {
        // '>' is scanned after '<', so "<>" resolves to '>'
        assert_eq!(ComparisonOp::scan("a <> 1"), Some(ComparisonOp::Gt));
    }

    #[test]
    fn test_evaluate_numeric() {
        let five = Scalar::Int(5);
        assert!(ComparisonOp::Eq.evaluate(&five, &Scalar::Int(5)));
        assert!(ComparisonOp::LtEq.evaluate(&five, &Scalar::Int(5)));
        assert!(ComparisonOp::Gt.evaluate(&five, &Scalar::Float(4.5)));
        assert!(!ComparisonOp::Lt.evaluate(&five, &Scalar::Int(5)));
    }

    #[test]
    fn test_incomparable_ordering_is_false() {
        let left = Scalar::Int(5);
        let right = Scalar::Str("blue".into());
        assert!(!ComparisonOp::Lt.evaluate(&left, &right));
        assert!(!ComparisonOp::GtEq.evaluate(&left, &right));
        assert!(!ComparisonOp::Eq.evaluate(&left, &right));
        assert!(ComparisonOp::NotEq.evaluate(&left, &right));
    }

    #[test]
    fn test_null_row_value() {
        let literal = Scalar::Str("x".into());
        assert!(!ComparisonOp::Eq.evaluate(&Scalar::Null, &literal));
        assert!(ComparisonOp::NotEq.evaluate(&Scalar::Null, &literal));
        assert!(!ComparisonOp::Lt.evaluate(&Scalar::Null, &literal));
    }

    #[test]
    fn test_cast_follows_sample_type() {
        assert_eq!(cast_literal(&Scalar::Int(1), "25"), Scalar::Int(25));
        assert!(matches!(
            cast_literal(&Scalar::Float(1.0), "2.5"),
            Scalar::Float(f) if f == 2.5
        ));
        assert_eq!(
            cast_literal(&Scalar::Int(1), "2.5"),
            Scalar::Str("2.5".into())
        );
        assert_eq!(
            cast_literal(&Scalar::Str("a".into()), "25"),
            Scalar::Str("25".into())
        );
        assert_eq!(cast_literal(&Scalar::Null, "25"), Scalar::Str("25".into()));
    }

    #[test]
    fn test_cast_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let sample = Scalar::Timestamp(ts);
        assert_eq!(
            cast_literal(&sample, "'2024-01-02 03:04:05 +0000'"),
            Scalar::Timestamp(ts)
        );
        assert_eq!(
            cast_literal(&sample, "soon"),
            Scalar::Str("soon".into())
        );
    }
}
