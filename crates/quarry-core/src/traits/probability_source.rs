use crate::config::InferenceParams;
use crate::errors::QuarryResult;
use crate::models::{PoolView, ProbabilityResult};

/// Model side of the loop: turns a batch of samples into probability estimates.
///
/// `Ok(None)` means "nothing to score" and ends the step without labelling.
pub trait ProbabilitySource<T> {
    fn probabilities(
        &mut self,
        pool: &PoolView<'_, T>,
        params: &InferenceParams,
    ) -> QuarryResult<Option<ProbabilityResult>>;
}

impl<T, F> ProbabilitySource<T> for F
where
    F: FnMut(&PoolView<'_, T>, &InferenceParams) -> QuarryResult<Option<ProbabilityResult>>,
{
    fn probabilities(
        &mut self,
        pool: &PoolView<'_, T>,
        params: &InferenceParams,
    ) -> QuarryResult<Option<ProbabilityResult>> {
        self(pool, params)
    }
}
