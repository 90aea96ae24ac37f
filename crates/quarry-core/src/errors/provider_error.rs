/// Pool provider failures: labelling and state capture.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("labelling failed: {reason}")]
    LabelFailed { reason: String },

    #[error("pool index {index} out of range for pool of {pool_size}")]
    IndexOutOfRange { index: usize, pool_size: usize },

    #[error("state capture failed: {reason}")]
    StateCapture { reason: String },
}
