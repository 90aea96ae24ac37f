// Single source of truth for all default values.

// --- Active loop ---
pub const DEFAULT_NDATA_TO_LABEL: usize = 1;
pub const DEFAULT_MAX_SAMPLE: i64 = crate::constants::UNLIMITED_MAX_SAMPLE;

// --- Inference ---
pub const DEFAULT_BATCH_SIZE: usize = 32;
pub const DEFAULT_ITERATIONS: usize = 20;
pub const DEFAULT_USE_CUDA: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
