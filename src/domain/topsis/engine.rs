//! Topsis Engine - the five-step scoring pipeline.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Impact, Score, ValidationError, Weights};

use super::{DecisionMatrix, MatrixValidator, Ranker};

/// Score and rank for one alternative, aligned to input row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    /// Index of the alternative in the input matrix.
    pub row_index: usize,
    /// Closeness to the ideal best, in [0, 1].
    pub score: Score,
    /// Competition rank; 1 is best, ties share a rank.
    pub rank: usize,
}

/// Ideal best/worst reference vectors, one value per criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealPoints {
    pub best: Vec<f64>,
    pub worst: Vec<f64>,
}

/// The TOPSIS scoring pipeline.
///
/// All steps assume validated input; [`TopsisEngine::evaluate`] runs the
/// validator first and is the entry point callers should use.
pub struct TopsisEngine;

impl TopsisEngine {
    /// Validates the input and computes score and rank per alternative.
    ///
    /// Results come back in input row order. The whole pipeline is one
    /// synchronous pass with no state between invocations, so identical
    /// inputs produce bit-identical outputs.
    pub fn evaluate(
        matrix: &DecisionMatrix,
        weights: &Weights,
        impacts: &[Impact],
    ) -> Result<Vec<ResultRow>, ValidationError> {
        MatrixValidator::validate(matrix, weights, impacts)?;

        let normalized = Self::normalize(matrix);
        let weighted = Self::apply_weights(&normalized, weights);
        let ideal = Self::ideal_points(&weighted, impacts);
        let scores = Self::closeness_scores(&weighted, &ideal);
        let ranks = Ranker::rank(&scores);

        Ok(scores
            .into_iter()
            .zip(ranks)
            .enumerate()
            .map(|(row_index, (score, rank))| ResultRow {
                row_index,
                score,
                rank,
            })
            .collect())
    }

    /// Vector-normalizes each column: every entry is divided by the
    /// column's root-sum-of-squares, so squared entries per column sum to 1.
    ///
    /// Precondition: no degenerate (all-zero) column, enforced by the
    /// validator.
    pub fn normalize(matrix: &DecisionMatrix) -> Vec<Vec<f64>> {
        let cols = matrix.column_count();
        let rss: Vec<f64> = (0..cols)
            .map(|j| matrix.column(j).map(|v| v * v).sum::<f64>().sqrt())
            .collect();

        matrix
            .rows()
            .iter()
            .map(|row| row.iter().zip(&rss).map(|(v, d)| v / d).collect())
            .collect()
    }

    /// Scales each normalized column by its weight.
    pub fn apply_weights(normalized: &[Vec<f64>], weights: &Weights) -> Vec<Vec<f64>> {
        normalized
            .iter()
            .map(|row| {
                row.iter()
                    .zip(weights.values())
                    .map(|(v, w)| v * w)
                    .collect()
            })
            .collect()
    }

    /// Derives the ideal best/worst value per criterion from the weighted
    /// matrix: max is best for a benefit criterion, min for a cost
    /// criterion, and vice versa for worst.
    pub fn ideal_points(weighted: &[Vec<f64>], impacts: &[Impact]) -> IdealPoints {
        let mut best = Vec::with_capacity(impacts.len());
        let mut worst = Vec::with_capacity(impacts.len());

        for (j, impact) in impacts.iter().enumerate() {
            let column = weighted.iter().map(|row| row[j]);
            let max = column.clone().fold(f64::NEG_INFINITY, f64::max);
            let min = column.fold(f64::INFINITY, f64::min);

            match impact {
                Impact::Benefit => {
                    best.push(max);
                    worst.push(min);
                }
                Impact::Cost => {
                    best.push(min);
                    worst.push(max);
                }
            }
        }

        IdealPoints { best, worst }
    }

    /// Computes each row's closeness score from its Euclidean distances to
    /// the ideal points: `d_worst / (d_best + d_worst)`.
    ///
    /// A row identical to both ideals has a zero denominator and is defined
    /// as score 0. This is an explicit degenerate-input convention kept for
    /// output compatibility, not a computed value.
    pub fn closeness_scores(weighted: &[Vec<f64>], ideal: &IdealPoints) -> Vec<Score> {
        weighted
            .iter()
            .map(|row| {
                let dist_best = Self::euclidean_distance(row, &ideal.best);
                let dist_worst = Self::euclidean_distance(row, &ideal.worst);
                let denominator = dist_best + dist_worst;

                if denominator == 0.0 {
                    Score::ZERO
                } else {
                    Score::new(dist_worst / denominator)
                }
            })
            .collect()
    }

    fn euclidean_distance(row: &[f64], reference: &[f64]) -> f64 {
        row.iter()
            .zip(reference)
            .map(|(v, r)| (v - r) * (v - r))
            .sum::<f64>()
            .sqrt()
    }
}
