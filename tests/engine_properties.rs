//! Property-based tests for the scoring pipeline.

use proptest::prelude::*;

use topsis_engine::domain::foundation::{Impact, ValidationError, Weights};
use topsis_engine::domain::topsis::{DecisionMatrix, TopsisEngine};

fn impact_strategy() -> impl Strategy<Value = Impact> {
    prop_oneof![Just(Impact::Benefit), Just(Impact::Cost)]
}

/// Matrices with strictly positive cells cannot have degenerate columns,
/// so every generated input passes validation.
fn valid_input() -> impl Strategy<Value = (DecisionMatrix, Weights, Vec<Impact>)> {
    (1usize..8, 2usize..6).prop_flat_map(|(rows, cols)| {
        (
            prop::collection::vec(prop::collection::vec(0.1f64..1000.0, cols), rows),
            prop::collection::vec(0.01f64..10.0, cols),
            prop::collection::vec(impact_strategy(), cols),
        )
            .prop_map(|(matrix, weights, impacts)| {
                (
                    DecisionMatrix::from_rows(matrix),
                    Weights::new(weights),
                    impacts,
                )
            })
    })
}

proptest! {
    #[test]
    fn every_score_lies_in_unit_interval((matrix, weights, impacts) in valid_input()) {
        let rows = TopsisEngine::evaluate(&matrix, &weights, &impacts).unwrap();

        for row in &rows {
            prop_assert!(row.score.value() >= 0.0);
            prop_assert!(row.score.value() <= 1.0);
        }
    }

    #[test]
    fn ranks_follow_minimum_ranking((matrix, weights, impacts) in valid_input()) {
        let rows = TopsisEngine::evaluate(&matrix, &weights, &impacts).unwrap();

        for row in &rows {
            let strictly_better = rows
                .iter()
                .filter(|other| other.score.value() > row.score.value())
                .count();
            prop_assert_eq!(row.rank, 1 + strictly_better);
        }

        // Rank 1 always goes to (all) rows with the maximum score.
        let max = rows
            .iter()
            .map(|r| r.score.value())
            .fold(f64::NEG_INFINITY, f64::max);
        for row in &rows {
            prop_assert_eq!(row.rank == 1, row.score.value() == max);
        }
    }

    #[test]
    fn repeated_runs_are_bit_identical((matrix, weights, impacts) in valid_input()) {
        let first = TopsisEngine::evaluate(&matrix, &weights, &impacts).unwrap();
        let second = TopsisEngine::evaluate(&matrix, &weights, &impacts).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn results_align_to_input_rows((matrix, weights, impacts) in valid_input()) {
        let rows = TopsisEngine::evaluate(&matrix, &weights, &impacts).unwrap();

        prop_assert_eq!(rows.len(), matrix.row_count());
        for (i, row) in rows.iter().enumerate() {
            prop_assert_eq!(row.row_index, i);
        }
    }

    #[test]
    fn constant_zero_column_is_rejected(
        (matrix, weights, impacts) in valid_input(),
        zero_col in 0usize..6,
    ) {
        let zero_col = zero_col % matrix.column_count();
        let rows: Vec<Vec<f64>> = matrix
            .rows()
            .iter()
            .map(|row| {
                let mut row = row.clone();
                row[zero_col] = 0.0;
                row
            })
            .collect();
        let degenerate = DecisionMatrix::from_rows(rows);

        let result = TopsisEngine::evaluate(&degenerate, &weights, &impacts);
        let is_degenerate_err = matches!(
            result,
            Err(ValidationError::DegenerateColumn { .. })
        );
        prop_assert!(is_degenerate_err);
    }
}
