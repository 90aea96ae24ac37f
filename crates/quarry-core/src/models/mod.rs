//! Step-scoped data flowing between the loop and its collaborators.

pub mod pool_view;
pub mod probability;
pub mod ranking;
pub mod snapshot;

pub use pool_view::PoolView;
pub use probability::{ProbabilityChunk, ProbabilityResult, ProbabilityStream};
pub use ranking::Ranking;
pub use snapshot::UncertaintySnapshot;
