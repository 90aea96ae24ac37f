use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

use super::defaults;

/// Selection loop configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActiveConfig {
    /// Number of samples labelled per step.
    pub ndata_to_label: usize,
    /// Upper bound on the pool scored per step. `-1` disables the limit.
    pub max_sample: i64,
    /// Directory receiving one uncertainty snapshot per step, if set.
    /// An empty string is read as unset.
    #[serde(default, deserialize_with = "empty_path_as_none")]
    pub uncertainty_folder: Option<PathBuf>,
    /// Seed for pool subsampling. Drawn from OS entropy when absent.
    pub seed: Option<u64>,
}

impl ActiveConfig {
    /// `max_sample` as an optional limit; any negative value means unlimited.
    pub fn max_sample_limit(&self) -> Option<usize> {
        usize::try_from(self.max_sample).ok()
    }
}

impl Default for ActiveConfig {
    fn default() -> Self {
        Self {
            ndata_to_label: defaults::DEFAULT_NDATA_TO_LABEL,
            max_sample: defaults::DEFAULT_MAX_SAMPLE,
            uncertainty_folder: None,
            seed: None,
        }
    }
}

fn empty_path_as_none<'de, D>(deserializer: D) -> Result<Option<PathBuf>, D::Error>
where
    D: Deserializer<'de>,
{
    let path = Option::<PathBuf>::deserialize(deserializer)?;
    Ok(path.filter(|p| !p.as_os_str().is_empty()))
}
