//! Error handling for Quarry.
//! One error enum per collaborator, `thiserror` only. Nothing is recovered
//! inside the loop: every variant reaches the caller of `step()` untouched.

pub mod config_error;
pub mod heuristic_error;
pub mod probability_error;
pub mod provider_error;
pub mod quarry_error;
pub mod snapshot_error;

pub use config_error::ConfigError;
pub use heuristic_error::HeuristicError;
pub use probability_error::ProbabilityError;
pub use provider_error::ProviderError;
pub use quarry_error::{QuarryError, QuarryResult};
pub use snapshot_error::SnapshotError;
