//! Aggregated results and cursor iteration.
//!
//! One dispatch call produces one [`StatementResults`]: the per-statement
//! outcomes in submission order, regardless of which statement finished
//! first. The aggregate is handed to the caller, who typically consumes it
//! through a forward-only [`ResultCursor`].

use crate::session::Rows;

/// Ordered per-statement results of one dispatch call.
///
/// Ordering matches statement submission order, not completion order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StatementResults {
    outcomes: Vec<Rows>,
}

impl StatementResults {
    /// Create an aggregate from per-statement outcomes in submission order.
    pub fn new(outcomes: Vec<Rows>) -> Self {
        Self { outcomes }
    }

    /// Number of statement outcomes.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Check whether the aggregate holds no outcomes.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Get the outcome of the statement at the given submission index.
    pub fn get(&self, index: usize) -> Option<&Rows> {
        self.outcomes.get(index)
    }

    /// Iterate over outcomes in submission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rows> {
        self.outcomes.iter()
    }

    /// Total row count across all outcomes.
    pub fn total_rows(&self) -> usize {
        self.outcomes.iter().map(Rows::row_count).sum()
    }

    /// Convert into a forward-only cursor over all rows.
    pub fn into_cursor(self) -> ResultCursor {
        ResultCursor::new(self)
    }
}

impl IntoIterator for StatementResults {
    type Item = Rows;
    type IntoIter = std::vec::IntoIter<Rows>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.into_iter()
    }
}

impl<'a> IntoIterator for &'a StatementResults {
    type Item = &'a Rows;
    type IntoIter = std::slice::Iter<'a, Rows>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}

/// Forward-only cursor over the rows of an aggregated result.
///
/// Yields every row of every statement, statement by statement in submission
/// order. Statements that returned no rows contribute nothing.
pub struct ResultCursor {
    statement_count: usize,
    remaining: std::vec::IntoIter<Rows>,
    current: std::vec::IntoIter<Vec<serde_json::Value>>,
}

impl ResultCursor {
    fn new(results: StatementResults) -> Self {
        Self {
            statement_count: results.len(),
            remaining: results.outcomes.into_iter(),
            current: Vec::new().into_iter(),
        }
    }

    /// Number of statements the cursor spans.
    pub fn statement_count(&self) -> usize {
        self.statement_count
    }
}

impl Iterator for ResultCursor {
    type Item = Vec<serde_json::Value>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(row) = self.current.next() {
                return Some(row);
            }
            self.current = self.remaining.next()?.rows.into_iter();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ColumnSpec;
    use serde_json::json;

    fn one_column_rows(values: &[i64]) -> Rows {
        Rows::new(
            vec![ColumnSpec {
                name: "v".to_string(),
                type_name: "bigint".to_string(),
            }],
            values.iter().map(|v| vec![json!(v)]).collect(),
        )
    }

    #[test]
    fn test_results_preserve_order() {
        let results = StatementResults::new(vec![
            one_column_rows(&[1]),
            one_column_rows(&[2]),
            one_column_rows(&[3]),
        ]);

        assert_eq!(results.len(), 3);
        assert_eq!(results.get(0).unwrap().rows[0][0], json!(1));
        assert_eq!(results.get(2).unwrap().rows[0][0], json!(3));
        assert!(results.get(3).is_none());
    }

    #[test]
    fn test_total_rows_spans_statements() {
        let results = StatementResults::new(vec![
            one_column_rows(&[1, 2]),
            Rows::applied(),
            one_column_rows(&[3]),
        ]);
        assert_eq!(results.total_rows(), 3);
    }

    #[test]
    fn test_cursor_yields_rows_in_submission_order() {
        let results = StatementResults::new(vec![
            one_column_rows(&[1, 2]),
            Rows::applied(),
            one_column_rows(&[3]),
        ]);

        let cursor = results.into_cursor();
        assert_eq!(cursor.statement_count(), 3);

        let values: Vec<_> = cursor.map(|row| row[0].clone()).collect();
        assert_eq!(values, vec![json!(1), json!(2), json!(3)]);
    }

    #[test]
    fn test_cursor_over_empty_aggregate() {
        let mut cursor = StatementResults::default().into_cursor();
        assert_eq!(cursor.statement_count(), 0);
        assert!(cursor.next().is_none());
    }
}
