use serde::Serialize;

use crate::errors::QuarryResult;

/// Dataset side of the loop: owns the labelled/unlabelled partition.
///
/// Positions passed to `label` are positions in the sequence returned by the
/// most recent `pool()` call. Single writer: a provider is driven by one loop.
pub trait PoolProvider {
    /// Reference to one unlabelled sample (an id, a path, a row handle...).
    type Sample;
    /// Opaque labelling state captured into uncertainty snapshots.
    type State: Serialize;

    /// Current unlabelled samples, in pool order.
    fn pool(&self) -> Vec<Self::Sample>;

    /// Mark the given pool positions as labelled, removing them from later pools.
    fn label(&mut self, indices: &[usize]) -> QuarryResult<()>;

    /// Capture the labelling state.
    fn state_dict(&self) -> QuarryResult<Self::State>;

    /// Total number of labelled samples.
    fn n_labelled(&self) -> usize;
}
