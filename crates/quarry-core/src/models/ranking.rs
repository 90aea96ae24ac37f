use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::errors::HeuristicError;

/// Heuristic output: pool-local sample indices, most informative first,
/// and the uncertainty of each, index-aligned with `to_label`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub to_label: Vec<usize>,
    pub uncertainty: Vec<f64>,
}

impl Ranking {
    pub fn new(to_label: Vec<usize>, uncertainty: Vec<f64>) -> Self {
        Self {
            to_label,
            uncertainty,
        }
    }

    /// Rank samples by descending score. Ties keep pool order; NaN sorts last.
    pub fn from_scores(scores: &[f64]) -> Self {
        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| descending(scores[a], scores[b]));
        let uncertainty = order.iter().map(|&i| scores[i]).collect();
        Self {
            to_label: order,
            uncertainty,
        }
    }

    pub fn len(&self) -> usize {
        self.to_label.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_label.is_empty()
    }

    /// Check the two sequences line up.
    pub fn validate(&self) -> Result<(), HeuristicError> {
        if self.to_label.len() != self.uncertainty.len() {
            return Err(HeuristicError::LengthMismatch {
                ranked: self.to_label.len(),
                scores: self.uncertainty.len(),
            });
        }
        Ok(())
    }

    /// The first `n` ranked indices (fewer if the ranking is shorter).
    pub fn top(&self, n: usize) -> &[usize] {
        &self.to_label[..n.min(self.to_label.len())]
    }
}

/// Descending order over scores with NaN after every number.
pub fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_scores_orders_most_uncertain_first() {
        let ranking = Ranking::from_scores(&[0.1, 0.9, 0.5]);
        assert_eq!(ranking.to_label, vec![1, 2, 0]);
        assert_eq!(ranking.uncertainty, vec![0.9, 0.5, 0.1]);
    }

    #[test]
    fn from_scores_is_stable_on_ties() {
        let ranking = Ranking::from_scores(&[0.5, 0.5, 0.7, 0.5]);
        assert_eq!(ranking.to_label, vec![2, 0, 1, 3]);
    }

    #[test]
    fn from_scores_puts_nan_last() {
        let ranking = Ranking::from_scores(&[f64::NAN, 0.2, 0.8]);
        assert_eq!(ranking.to_label, vec![2, 1, 0]);
    }

    #[test]
    fn validate_rejects_mismatched_lengths() {
        let ranking = Ranking::new(vec![0, 1], vec![0.3]);
        let err = ranking.validate().unwrap_err();
        assert!(matches!(
            err,
            HeuristicError::LengthMismatch {
                ranked: 2,
                scores: 1
            }
        ));
    }

    #[test]
    fn top_clamps_to_length() {
        let ranking = Ranking::new(vec![4, 2], vec![0.9, 0.1]);
        assert_eq!(ranking.top(5), &[4, 2]);
        assert_eq!(ranking.top(1), &[4]);
        assert!(ranking.top(0).is_empty());
    }
}
