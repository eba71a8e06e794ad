//! Column model
//!
//! A select clause is a comma-separated list of columns. Plain columns
//! project a row field; `sum(x)` and `max(x)` aggregate over the rows of a
//! group and write their result under the expression text.

mod aggregate;
mod column;

pub use column::{Column, ColumnKind};

use crate::value::Row;

/// The parsed select list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    columns: Vec<Column>,
    wildcard: bool,
}

impl Selection {
    /// Parses a select clause. Empty terms are skipped; a `*` term keeps
    /// every field of the output rows.
    pub fn parse(clause: Option<&str>) -> Self {
        let mut selection = Selection::default();
        for term in clause.unwrap_or_default().split(',').map(str::trim) {
            match term {
                "" => {}
                "*" => selection.wildcard = true,
                expression => selection.columns.push(Column::parse(expression)),
            }
        }
        selection
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns true if the output keeps every field
    pub fn selects_all(&self) -> bool {
        self.wildcard || self.columns.is_empty()
    }

    /// Keeps only fields labelled by a select column.
    ///
    /// Field order follows each row, not the select list. Labels with no
    /// matching field are omitted.
    pub fn project(&self, rows: Vec<Row>) -> Vec<Row> {
        if self.selects_all() {
            return rows;
        }
        rows.into_iter()
            .map(|mut row| {
                row.retain(|key, _| self.columns.iter().any(|col| col.label() == key));
                row
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> Row {
        [("a", 1), ("b", 2), ("c", 3)].into_iter().collect()
    }

    #[test]
    fn test_parse_select_with_sum() {
        let selection = Selection::parse(Some("sum(column), column2"));
        assert_eq!(selection.columns().len(), 2);
        assert_eq!(selection.columns()[0].kind(), ColumnKind::Sum);
        assert_eq!(selection.columns()[0].label(), "sum(column)");
        assert_eq!(selection.columns()[1].label(), "column2");
    }

    #[test]
    fn test_absent_select_keeps_everything() {
        let rows = Selection::parse(None).project(vec![row()]);
        assert_eq!(rows[0].len(), 3);
    }

    #[test]
    fn test_star_keeps_everything() {
        let selection = Selection::parse(Some("*"));
        assert!(selection.selects_all());
        assert_eq!(selection.project(vec![row()])[0].len(), 3);
    }

    #[test]
    fn test_projection_follows_row_order() {
        let rows = Selection::parse(Some("c, a")).project(vec![row()]);
        assert_eq!(rows[0].keys().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn test_unknown_labels_are_omitted() {
        let rows = Selection::parse(Some("a, zzz")).project(vec![row()]);
        assert_eq!(rows[0].keys().collect::<Vec<_>>(), vec!["a"]);
    }
}
