//! Span definitions per loop phase: step, scoring, ranking, snapshot.

/// Create the span wrapping one `step()` call.
#[macro_export]
macro_rules! step_span {
    ($ndata_to_label:expr, $max_sample:expr) => {
        tracing::info_span!(
            "quarry.step",
            ndata_to_label = $ndata_to_label,
            max_sample = ?$max_sample
        )
    };
}

/// Create the span around a probability source call.
#[macro_export]
macro_rules! scoring_span {
    ($pool_size:expr) => {
        tracing::debug_span!("quarry.scoring", pool_size = $pool_size)
    };
}

/// Create the span around a heuristic call.
#[macro_export]
macro_rules! ranking_span {
    ($streamed:expr) => {
        tracing::debug_span!("quarry.ranking", streamed = $streamed)
    };
}

/// Create the span around a snapshot write.
#[macro_export]
macro_rules! snapshot_span {
    ($path:expr) => {
        tracing::debug_span!("quarry.snapshot", path = %$path.display())
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const STEP: &str = "quarry.step";
    pub const SCORING: &str = "quarry.scoring";
    pub const RANKING: &str = "quarry.ranking";
    pub const SNAPSHOT: &str = "quarry.snapshot";
}
