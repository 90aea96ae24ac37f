use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::defaults;

/// Fixed parameters forwarded to the probability source on every step.
///
/// The named fields cover what Monte-Carlo inference routines commonly take;
/// anything else goes in `extra` and is interpreted by the source alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceParams {
    /// Samples per forward batch.
    pub batch_size: usize,
    /// Stochastic forward passes per sample.
    pub iterations: usize,
    /// Run inference on an accelerator.
    pub use_cuda: bool,
    /// Source-specific parameters.
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl InferenceParams {
    /// Decode a source-specific parameter. `None` if missing or of another type.
    pub fn extra_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.extra
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Builder-style insertion of a source-specific parameter.
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

impl Default for InferenceParams {
    fn default() -> Self {
        Self {
            batch_size: defaults::DEFAULT_BATCH_SIZE,
            iterations: defaults::DEFAULT_ITERATIONS,
            use_cuda: defaults::DEFAULT_USE_CUDA,
            extra: BTreeMap::new(),
        }
    }
}
