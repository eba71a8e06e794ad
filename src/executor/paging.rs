//! OFFSET and LIMIT
//!
//! Counts are read permissively: text that is not a number counts as 0.

use crate::value::Row;

/// Reads a leading integer, ignoring surrounding space and any trailing
/// text. Non-numeric text and negative values give 0.
pub fn parse_count(text: &str) -> usize {
    let text = text.trim();
    let digits = match text.as_bytes().first() {
        Some(b'-') => return 0,
        Some(b'+') => &text[1..],
        _ => text,
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return 0;
    }
    // Only overflow can fail here
    digits[..end].parse().unwrap_or(usize::MAX)
}

/// Drops leading rows. An offset past the end gives no rows.
pub fn apply_offset(rows: Vec<Row>, offset: usize) -> Vec<Row> {
    rows.into_iter().skip(offset).collect()
}

/// Keeps leading rows
pub fn apply_limit(mut rows: Vec<Row>, limit: usize) -> Vec<Row> {
    rows.truncate(limit);
    rows
}
