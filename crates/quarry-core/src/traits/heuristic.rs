use crate::errors::QuarryResult;
use crate::models::{ProbabilityResult, Ranking};

/// Selection policy: ranks pool-local samples by informativeness.
///
/// Returned indices are positions in the working pool the probabilities were
/// computed on, not in the provider's full pool.
pub trait RankingHeuristic {
    fn rank(&mut self, probs: ProbabilityResult) -> QuarryResult<Ranking>;
}

impl<F> RankingHeuristic for F
where
    F: FnMut(ProbabilityResult) -> QuarryResult<Ranking>,
{
    fn rank(&mut self, probs: ProbabilityResult) -> QuarryResult<Ranking> {
        self(probs)
    }
}
