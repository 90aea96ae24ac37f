//! Collaborator contracts of the active learning loop.

pub mod heuristic;
pub mod pool_provider;
pub mod probability_source;

pub use heuristic::RankingHeuristic;
pub use pool_provider::PoolProvider;
pub use probability_source::ProbabilitySource;
