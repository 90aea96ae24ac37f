use super::{ConfigError, HeuristicError, ProbabilityError, ProviderError, SnapshotError};

/// Top-level error for everything a loop step or its setup can raise.
/// Aggregates collaborator errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum QuarryError {
    #[error("pool provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("probability source error: {0}")]
    Probability(#[from] ProbabilityError),

    #[error("heuristic error: {0}")]
    Heuristic(#[from] HeuristicError),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type QuarryResult<T> = Result<T, QuarryError>;
