use ndarray::Axis;
use quarry_core::errors::QuarryResult;
use quarry_core::models::{ProbabilityResult, Ranking};
use quarry_core::traits::RankingHeuristic;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random selection: each sample gets an independent draw in `[0, 1)`
/// as its uncertainty, and samples are ranked by descending draw.
///
/// Each instance owns its generator; construct one per loop.
#[derive(Debug, Clone)]
pub struct RandomHeuristic {
    rng: StdRng,
}

impl RandomHeuristic {
    /// Generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomHeuristic {
    fn default() -> Self {
        Self::new()
    }
}

impl RankingHeuristic for RandomHeuristic {
    fn rank(&mut self, probs: ProbabilityResult) -> QuarryResult<Ranking> {
        // Streams have to be drained to learn how many samples they hold.
        let mut n_samples = 0;
        for chunk in probs.into_chunks() {
            n_samples += chunk?.len_of(Axis(0));
        }
        let scores: Vec<f64> = (0..n_samples).map(|_| self.rng.gen::<f64>()).collect();
        Ok(Ranking::from_scores(&scores))
    }
}
