//! # quarry-loop
//!
//! One active learning step: pool retrieval → optional subsampling →
//! probability computation → ranking → index translation → optional
//! uncertainty snapshot → labelling of the top candidates.
//!
//! The loop owns no dataset state. Everything that changes between steps
//! lives in the [`PoolProvider`](quarry_core::PoolProvider); `step()` reports
//! with its boolean whether the caller should keep iterating.

pub mod engine;
pub mod heuristics;
pub mod sampling;
pub mod snapshot;

pub use engine::ActiveLearningLoop;
pub use heuristics::RandomHeuristic;
pub use snapshot::{read_snapshot, snapshot_file_name, write_snapshot};
