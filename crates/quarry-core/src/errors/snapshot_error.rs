/// Uncertainty snapshot sink failures.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot io error at {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("snapshot serialization failed: {reason}")]
    Serialize { reason: String },

    #[error("snapshot deserialization failed for {path}: {reason}")]
    Deserialize { path: String, reason: String },
}
