//! Recommender crate: the request-facing boundary of the engine.
//!
//! This crate owns the orchestrator that validates a request, runs the
//! per-facet pipelines (concurrently for the blended "all" mode), and
//! merges the results into one consensus ranking.

pub mod orchestrator;

pub use orchestrator::Recommender;
