//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors raised while screening engine input.
///
/// Every variant is recoverable: the caller fixes the input and resubmits.
/// The core never terminates the process on malformed input.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Decision matrix has invalid shape ({rows} rows x {cols} columns); need at least 1 row and 2 rectangular criteria columns")]
    Shape { rows: usize, cols: usize },

    #[error("Non-numeric value in {place}: {value}")]
    NonNumeric { place: String, value: String },

    #[error("Expected {expected} {vector} to match the criteria count, got {actual}")]
    LengthMismatch {
        vector: String,
        expected: usize,
        actual: usize,
    },

    #[error("Impact at position {position} must be '+' or '-', got '{symbol}'")]
    InvalidImpact { position: usize, symbol: String },

    #[error("Criteria column {col} has zero root-sum-of-squares and cannot be normalized")]
    DegenerateColumn { col: usize },
}

impl ValidationError {
    /// Creates a shape error from the observed matrix dimensions.
    pub fn shape(rows: usize, cols: usize) -> Self {
        ValidationError::Shape { rows, cols }
    }

    /// Creates a non-numeric error for a matrix cell.
    pub fn non_numeric_cell(row: usize, col: usize, value: f64) -> Self {
        ValidationError::NonNumeric {
            place: format!("matrix cell (row {}, column {})", row, col),
            value: value.to_string(),
        }
    }

    /// Creates a non-numeric error for a weight token.
    pub fn non_numeric_weight(position: usize, token: impl Into<String>) -> Self {
        ValidationError::NonNumeric {
            place: format!("weight at position {}", position),
            value: token.into(),
        }
    }

    /// Creates a length mismatch error for a named parameter vector.
    pub fn length_mismatch(vector: impl Into<String>, expected: usize, actual: usize) -> Self {
        ValidationError::LengthMismatch {
            vector: vector.into(),
            expected,
            actual,
        }
    }

    /// Creates an invalid impact symbol error.
    pub fn invalid_impact(position: usize, symbol: impl Into<String>) -> Self {
        ValidationError::InvalidImpact {
            position,
            symbol: symbol.into(),
        }
    }

    /// Creates a degenerate column error.
    pub fn degenerate_column(col: usize) -> Self {
        ValidationError::DegenerateColumn { col }
    }

    /// Returns the stable code for this error, for caller-side mapping.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::Shape { .. } => ErrorCode::ShapeError,
            ValidationError::NonNumeric { .. } => ErrorCode::NonNumericError,
            ValidationError::LengthMismatch { .. } => ErrorCode::LengthMismatchError,
            ValidationError::InvalidImpact { .. } => ErrorCode::InvalidImpactError,
            ValidationError::DegenerateColumn { .. } => ErrorCode::DegenerateColumnError,
        }
    }
}

/// Stable error codes for caller-side presentation mapping
/// (process exit code for the CLI, inline form error for the web UI).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ShapeError,
    NonNumericError,
    LengthMismatchError,
    InvalidImpactError,
    DegenerateColumnError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ShapeError => "SHAPE_ERROR",
            ErrorCode::NonNumericError => "NON_NUMERIC_ERROR",
            ErrorCode::LengthMismatchError => "LENGTH_MISMATCH_ERROR",
            ErrorCode::InvalidImpactError => "INVALID_IMPACT_ERROR",
            ErrorCode::DegenerateColumnError => "DEGENERATE_COLUMN_ERROR",
        };
        write!(f, "{}", s)
    }
}
