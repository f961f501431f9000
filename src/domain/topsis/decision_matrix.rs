//! Decision Matrix - Core data structure for TOPSIS scoring.

use serde::{Deserialize, Serialize};

/// The decision matrix: alternatives (rows) scored against criteria (columns).
///
/// Holds the numeric portion of the caller's table only; any leading
/// label/ID column has been stripped by the caller and is re-attached to
/// the results on the way out. Immutable input to the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionMatrix {
    /// Row-major criteria values, one inner vector per alternative.
    rows: Vec<Vec<f64>>,
}

impl DecisionMatrix {
    /// Creates a matrix from row-major values.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// Creates a builder for constructing a decision matrix.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    /// Returns the number of alternatives.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of criteria, taken from the first row.
    pub fn column_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    /// Returns true if the matrix has no alternatives.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns true if every row has the same length as the first.
    pub fn is_rectangular(&self) -> bool {
        let cols = self.column_count();
        self.rows.iter().all(|row| row.len() == cols)
    }

    /// Returns the rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Returns the values of column `col`, in row order.
    ///
    /// Assumes a rectangular matrix with `col` in range.
    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(move |row| row[col])
    }
}

/// Builder for constructing DecisionMatrix instances.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    rows: Vec<Vec<f64>>,
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one alternative's criteria values.
    pub fn row(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.rows.push(values.into_iter().collect());
        self
    }

    /// Builds the decision matrix.
    pub fn build(self) -> DecisionMatrix {
        DecisionMatrix::from_rows(self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_matrix_has_no_rows_or_columns() {
        let matrix = DecisionMatrix::default();
        assert!(matrix.is_empty());
        assert_eq!(matrix.row_count(), 0);
        assert_eq!(matrix.column_count(), 0);
        assert!(matrix.is_rectangular());
    }

    #[test]
    fn builder_creates_matrix_with_rows() {
        let matrix = DecisionMatrix::builder()
            .row([250.0, 16.0, 12.0])
            .row([200.0, 16.0, 8.0])
            .build();

        assert_eq!(matrix.row_count(), 2);
        assert_eq!(matrix.column_count(), 3);
        assert!(matrix.is_rectangular());
    }

    #[test]
    fn ragged_matrix_is_not_rectangular() {
        let matrix = DecisionMatrix::builder()
            .row([1.0, 2.0, 3.0])
            .row([4.0, 5.0])
            .build();

        assert!(!matrix.is_rectangular());
    }

    #[test]
    fn column_yields_values_in_row_order() {
        let matrix = DecisionMatrix::builder()
            .row([1.0, 10.0])
            .row([2.0, 20.0])
            .row([3.0, 30.0])
            .build();

        let col: Vec<f64> = matrix.column(1).collect();
        assert_eq!(col, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn matrix_serializes_to_json() {
        let matrix = DecisionMatrix::builder().row([1.0, 2.0]).build();
        let json = serde_json::to_string(&matrix).unwrap();
        assert!(json.contains("rows"));
    }

    #[test]
    fn matrix_deserializes_from_json() {
        let json = r#"{"rows": [[1.0, 2.0], [3.0, 4.0]]}"#;
        let matrix: DecisionMatrix = serde_json::from_str(json).unwrap();
        assert_eq!(matrix.row_count(), 2);
        assert_eq!(matrix.column_count(), 2);
    }
}
