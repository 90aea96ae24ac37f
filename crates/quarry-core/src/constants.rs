/// Quarry version string.
pub const QUARRY_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sentinel accepted by `max_sample` in config files meaning "no limit".
pub const UNLIMITED_MAX_SAMPLE: i64 = -1;

/// Prefix of every uncertainty snapshot file name.
pub const SNAPSHOT_FILE_PREFIX: &str = "uncertainty";

/// Extension of uncertainty snapshot files.
pub const SNAPSHOT_FILE_EXTENSION: &str = "pkl";

/// Project-level configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "quarry.toml";

/// Environment variable prefix for config overrides.
pub const ENV_PREFIX: &str = "QUARRY_";
