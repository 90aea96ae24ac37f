use ndarray::Axis;
use quarry_core::errors::QuarryResult;
use quarry_core::models::{ProbabilityResult, Ranking};
use quarry_core::traits::RankingHeuristic;

/// Heuristic that returns a preset ranking whatever it is given, and records
/// how it was called.
#[derive(Debug, Clone)]
pub struct FixedRanking {
    ranking: Ranking,
    calls: usize,
    streamed_calls: usize,
}

impl FixedRanking {
    pub fn new(to_label: Vec<usize>, uncertainty: Vec<f64>) -> Self {
        Self {
            ranking: Ranking::new(to_label, uncertainty),
            calls: 0,
            streamed_calls: 0,
        }
    }

    /// Uncertainty `1.0, 0.9, 0.8, ...` aligned with the given ranks.
    pub fn from_ranks(to_label: Vec<usize>) -> Self {
        let uncertainty = (0..to_label.len())
            .map(|k| 1.0 - k as f64 * 0.1)
            .collect();
        Self::new(to_label, uncertainty)
    }

    pub fn calls(&self) -> usize {
        self.calls
    }

    pub fn streamed_calls(&self) -> usize {
        self.streamed_calls
    }
}

impl RankingHeuristic for FixedRanking {
    fn rank(&mut self, probs: ProbabilityResult) -> QuarryResult<Ranking> {
        self.calls += 1;
        if probs.is_stream() {
            self.streamed_calls += 1;
        }
        Ok(self.ranking.clone())
    }
}

/// Scores each sample by its first output of its first iteration.
#[derive(Debug, Clone, Default)]
pub struct FirstOutputHeuristic;

impl RankingHeuristic for FirstOutputHeuristic {
    fn rank(&mut self, probs: ProbabilityResult) -> QuarryResult<Ranking> {
        let mut scores = Vec::new();
        for chunk in probs.into_chunks() {
            let chunk = chunk?;
            scores.extend(chunk.axis_iter(Axis(0)).map(|sample| sample[[0, 0]]));
        }
        Ok(Ranking::from_scores(&scores))
    }
}
