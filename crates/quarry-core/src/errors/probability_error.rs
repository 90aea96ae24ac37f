/// Probability source failures.
#[derive(Debug, thiserror::Error)]
pub enum ProbabilityError {
    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("probability shape mismatch: expected {expected} samples, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}
