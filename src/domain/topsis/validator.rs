//! Matrix Validator - input screening before any computation.

use crate::domain::foundation::{Impact, ValidationError, Weights};

use super::DecisionMatrix;

/// Minimum number of criteria columns a decision table needs.
///
/// Callers strip the leading label column before handing the table over,
/// so this counts criteria only.
pub const MIN_CRITERIA: usize = 2;

/// Input screening for the TOPSIS pipeline.
pub struct MatrixValidator;

impl MatrixValidator {
    /// Validates the matrix against the weight and impact vectors.
    ///
    /// Checks run in a fixed order and stop at the first violation:
    /// 1. Shape: at least 1 row, at least [`MIN_CRITERIA`] rectangular columns
    /// 2. Numeric content: every cell is a finite number
    /// 3. Lengths: weights, then impacts, match the criteria count
    /// 4. Degenerate columns: no column has zero root-sum-of-squares
    ///
    /// Impact symbol validity is enforced at construction by
    /// [`Impact::parse_list`], so it cannot fail here.
    ///
    /// No side effects; pure function of its inputs.
    pub fn validate(
        matrix: &DecisionMatrix,
        weights: &Weights,
        impacts: &[Impact],
    ) -> Result<(), ValidationError> {
        Self::check_shape(matrix)?;
        Self::check_numeric(matrix)?;
        Self::check_lengths(matrix, weights, impacts)?;
        Self::check_columns(matrix)?;
        Ok(())
    }

    fn check_shape(matrix: &DecisionMatrix) -> Result<(), ValidationError> {
        let rows = matrix.row_count();
        let cols = matrix.column_count();

        if rows == 0 || cols < MIN_CRITERIA {
            return Err(ValidationError::shape(rows, cols));
        }

        // A ragged table is reported with the offending row's width.
        for row in matrix.rows() {
            if row.len() != cols {
                return Err(ValidationError::shape(rows, row.len()));
            }
        }

        Ok(())
    }

    fn check_numeric(matrix: &DecisionMatrix) -> Result<(), ValidationError> {
        for (i, row) in matrix.rows().iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(ValidationError::non_numeric_cell(i, j, value));
                }
            }
        }
        Ok(())
    }

    fn check_lengths(
        matrix: &DecisionMatrix,
        weights: &Weights,
        impacts: &[Impact],
    ) -> Result<(), ValidationError> {
        let cols = matrix.column_count();

        if weights.len() != cols {
            return Err(ValidationError::length_mismatch(
                "weights",
                cols,
                weights.len(),
            ));
        }

        if impacts.len() != cols {
            return Err(ValidationError::length_mismatch(
                "impacts",
                cols,
                impacts.len(),
            ));
        }

        Ok(())
    }

    fn check_columns(matrix: &DecisionMatrix) -> Result<(), ValidationError> {
        for j in 0..matrix.column_count() {
            let sum_of_squares: f64 = matrix.column(j).map(|v| v * v).sum();
            if sum_of_squares == 0.0 {
                return Err(ValidationError::degenerate_column(j));
            }
        }
        Ok(())
    }
}
