//! ScoreRequestHandler - the shared scoring entry point.
//!
//! Front-ends hand over the numeric portion of the user's table plus the
//! raw weight/impact parameter strings exactly as the user typed them.
//! The handler parses the parameters, validates, scores, and returns rows
//! aligned to input order. File parsing, transport, and rendering stay
//! with the caller, which also re-attaches any label column afterwards.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::foundation::{Impact, ValidationError, Weights};
use crate::domain::topsis::{DecisionMatrix, ResultRow, TopsisEngine};

/// A scoring request as delivered by a front-end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    /// Criteria values, one inner vector per alternative. Any leading
    /// label/ID column has already been stripped by the caller.
    pub matrix: Vec<Vec<f64>>,
    /// Comma-separated weights, e.g. `"0.25,0.25,0.25,0.25"`.
    pub weights: String,
    /// Comma-separated impact symbols, e.g. `"-,+,+,+"`.
    pub impacts: String,
}

/// Scores and ranks aligned to the request's row order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub rows: Vec<ResultRow>,
}

/// Handles scoring requests from the CLI and web front-ends.
pub struct ScoreRequestHandler;

impl ScoreRequestHandler {
    /// Parses the raw parameter strings and runs the engine.
    ///
    /// Parameter parsing happens before matrix validation, so a malformed
    /// weight or impact string is reported even when the matrix is also
    /// invalid.
    pub fn handle(request: &ScoreRequest) -> Result<ScoreResponse, ValidationError> {
        let weights = Weights::parse(&request.weights)?;
        let impacts = Impact::parse_list(&request.impacts)?;
        let matrix = DecisionMatrix::from_rows(request.matrix.clone());

        debug!(
            rows = matrix.row_count(),
            criteria = matrix.column_count(),
            "Scoring request accepted"
        );

        let rows = TopsisEngine::evaluate(&matrix, &weights, &impacts)?;

        debug!(rows = rows.len(), "Scoring request completed");

        Ok(ScoreResponse { rows })
    }
}
