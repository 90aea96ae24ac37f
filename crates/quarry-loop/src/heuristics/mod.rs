//! Heuristics shipped with the loop.
//!
//! Scoring heuristics (entropy, BALD, margin...) live with the model code;
//! anything implementing [`RankingHeuristic`](quarry_core::RankingHeuristic)
//! plugs in, closures included.

pub mod random;

pub use random::RandomHeuristic;
