use serde::{Deserialize, Serialize};

/// Point-in-time record of one step's uncertainty, written once and never
/// mutated. `dataset` is whatever the pool provider's `state_dict` returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UncertaintySnapshot<S> {
    /// Index map of the step; `None` when the pool was supplied by the caller.
    pub indices: Option<Vec<usize>>,
    /// Uncertainty scores exactly as returned by the heuristic.
    pub uncertainty: Vec<f64>,
    /// Pool provider state at capture time.
    pub dataset: S,
}
