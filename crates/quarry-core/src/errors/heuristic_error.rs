/// Ranking heuristic failures and contract violations.
#[derive(Debug, thiserror::Error)]
pub enum HeuristicError {
    #[error("ranking failed: {reason}")]
    RankingFailed { reason: String },

    #[error("ranking length mismatch: {ranked} ranked indices, {scores} uncertainty scores")]
    LengthMismatch { ranked: usize, scores: usize },

    #[error("ranked index {index} outside working pool of {pool_size}")]
    RankOutOfRange { index: usize, pool_size: usize },
}
