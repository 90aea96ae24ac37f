//! Tracing setup: subscriber installation and span definitions.

pub mod spans;

use std::sync::Once;

use quarry_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the filter directive.
pub const LOG_ENV_VAR: &str = "QUARRY_LOG";

static INIT: Once = Once::new();

/// Initialize the Quarry tracing/logging system.
///
/// Reads `QUARRY_LOG` for per-module levels, e.g.
/// `QUARRY_LOG=quarry_loop=debug,quarry_core=warn`.
/// Falls back to `info` for every quarry crate. Idempotent.
pub fn init_tracing() {
    init_tracing_from_config(&ObservabilityConfig::default());
}

/// Initialize tracing from the `[observability]` config section.
/// `QUARRY_LOG` still wins when set. Idempotent.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(filter_for_level(&config.log_level)));
    install(filter, config.json);
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), false);
}

/// Filter directive enabling `level` for every quarry crate.
pub fn filter_for_level(level: &str) -> String {
    format!("quarry_core={level},quarry_loop={level},quarry_observability={level}")
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        // try_init: an embedding application may already own the global subscriber.
        let _ = if json {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };
    });
}
