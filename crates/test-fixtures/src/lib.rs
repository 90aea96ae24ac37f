//! Test doubles for the Quarry collaborators.
//!
//! An in-memory pool provider, scripted probability sources, and fixed
//! heuristics, shared by the integration tests of every crate.

pub mod dataset;
pub mod heuristics;
pub mod sources;

pub use dataset::{DatasetState, InMemoryDataset};
pub use heuristics::{FirstOutputHeuristic, FixedRanking};
pub use sources::{ScriptedSource, SourceMode, ValueSource};
