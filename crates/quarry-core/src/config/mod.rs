//! Configuration system for Quarry.
//! TOML-based, 3-layer resolution: env > project file > defaults.

pub mod active_config;
pub mod defaults;
pub mod inference_params;
pub mod observability_config;
pub mod quarry_config;

pub use active_config::ActiveConfig;
pub use inference_params::InferenceParams;
pub use observability_config::ObservabilityConfig;
pub use quarry_config::QuarryConfig;
