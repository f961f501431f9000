//! Ranker - competition ("minimum") ranking over closeness scores.

use crate::domain::foundation::Score;

/// Assigns integer ranks from scores, descending (highest score = rank 1).
pub struct Ranker;

impl Ranker {
    /// Computes competition ranks: `rank = 1 + count of strictly greater
    /// scores`.
    ///
    /// Tied scores share the minimum rank of the group and the next
    /// distinct score resumes past the whole group. Exact float equality
    /// defines a tie, so the result does not depend on row order.
    ///
    /// Do not switch this to dense or ordinal ranking; callers rely on
    /// minimum-ranking output semantics.
    pub fn rank(scores: &[Score]) -> Vec<usize> {
        scores
            .iter()
            .map(|score| {
                1 + scores
                    .iter()
                    .filter(|other| other.value() > score.value())
                    .count()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(values: &[f64]) -> Vec<Score> {
        values.iter().copied().map(Score::new).collect()
    }

    #[test]
    fn rank_empty_scores() {
        assert!(Ranker::rank(&[]).is_empty());
    }

    #[test]
    fn rank_single_score_is_one() {
        assert_eq!(Ranker::rank(&scores(&[0.4])), vec![1]);
    }

    #[test]
    fn rank_orders_descending() {
        let ranks = Ranker::rank(&scores(&[0.2, 0.9, 0.5]));
        assert_eq!(ranks, vec![3, 1, 2]);
    }

    #[test]
    fn tied_scores_share_minimum_rank() {
        // Competition ranking: [0.8, 0.8, 0.5] -> [1, 1, 3], not [1, 1, 2].
        let ranks = Ranker::rank(&scores(&[0.8, 0.8, 0.5]));
        assert_eq!(ranks, vec![1, 1, 3]);
    }

    #[test]
    fn tie_group_in_the_middle_jumps_rank() {
        let ranks = Ranker::rank(&scores(&[0.9, 0.6, 0.6, 0.6, 0.1]));
        assert_eq!(ranks, vec![1, 2, 2, 2, 5]);
    }

    #[test]
    fn all_tied_scores_all_rank_one() {
        let ranks = Ranker::rank(&scores(&[0.5, 0.5, 0.5]));
        assert_eq!(ranks, vec![1, 1, 1]);
    }

    #[test]
    fn rank_is_independent_of_row_order() {
        let forward = Ranker::rank(&scores(&[0.1, 0.8, 0.8]));
        let backward = Ranker::rank(&scores(&[0.8, 0.8, 0.1]));
        assert_eq!(forward, vec![3, 1, 1]);
        assert_eq!(backward, vec![1, 1, 3]);
    }
}
