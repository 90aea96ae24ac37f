//! # quarry-core
//!
//! Foundation crate for the Quarry active learning loop.
//! Defines the collaborator traits, the probability and ranking models,
//! errors, config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::QuarryConfig;
pub use errors::{QuarryError, QuarryResult};
pub use models::{PoolView, ProbabilityResult, Ranking, UncertaintySnapshot};
pub use traits::{PoolProvider, ProbabilitySource, RankingHeuristic};
