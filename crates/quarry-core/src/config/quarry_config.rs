//! Top-level Quarry configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ActiveConfig, InferenceParams, ObservabilityConfig};
use crate::constants::{CONFIG_FILE_NAME, ENV_PREFIX, UNLIMITED_MAX_SAMPLE};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`QUARRY_*`)
/// 2. Project config (`quarry.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuarryConfig {
    pub active: ActiveConfig,
    pub inference: InferenceParams,
    pub observability: ObservabilityConfig,
}

impl QuarryConfig {
    /// Load configuration for a project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let project_config_path = root.join(CONFIG_FILE_NAME);
        let mut config = if project_config_path.exists() {
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config, |key| std::env::var(key).ok());
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `QUARRY_*` overrides read through `lookup`.
    /// Values that fail to parse are ignored and the previous layer wins.
    pub fn apply_env_overrides<F>(config: &mut QuarryConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

        if let Some(v) = var("NDATA_TO_LABEL").and_then(|v| v.parse::<usize>().ok()) {
            config.active.ndata_to_label = v;
        }
        if let Some(v) = var("MAX_SAMPLE").and_then(|v| v.parse::<i64>().ok()) {
            config.active.max_sample = v;
        }
        if let Some(v) = var("UNCERTAINTY_FOLDER") {
            config.active.uncertainty_folder = if v.is_empty() {
                None
            } else {
                Some(PathBuf::from(v))
            };
        }
        if let Some(v) = var("SEED").and_then(|v| v.parse::<u64>().ok()) {
            config.active.seed = Some(v);
        }
        if let Some(v) = var("LOG_LEVEL") {
            config.observability.log_level = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(config: &QuarryConfig) -> Result<(), ConfigError> {
        if config.active.ndata_to_label == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "active.ndata_to_label".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if config.active.max_sample < UNLIMITED_MAX_SAMPLE {
            return Err(ConfigError::ValidationFailed {
                field: "active.max_sample".to_string(),
                message: "must be -1 (unlimited) or non-negative".to_string(),
            });
        }
        if config.inference.batch_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "inference.batch_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.inference.iterations == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "inference.iterations".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
