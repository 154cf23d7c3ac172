//! Seed ratings: the caller-supplied `(title, rating)` pairs.
//!
//! Before profiling, the seed list is reduced to a working set with
//! exact-pair deduplication: an entry is kept only if no identical
//! `(title, rating)` pair came before it. The same title rated twice
//! with *different* values keeps both entries and double-counts its
//! facet weight downstream, longstanding observable behavior that
//! callers may rely on, so it is preserved rather than collapsed to
//! one-entry-per-title.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One caller-supplied rating for a movie title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedRating {
    pub title: String,
    pub rating: f64,
}

impl SeedRating {
    pub fn new(title: impl Into<String>, rating: f64) -> Self {
        Self {
            title: title.into(),
            rating,
        }
    }

    /// Dedup key: the exact pair. Ratings compare bit-for-bit, so only
    /// a literally identical rating is considered a duplicate.
    fn key(&self) -> (&str, u64) {
        (self.title.as_str(), self.rating.to_bits())
    }
}

/// Drop exact `(title, rating)` duplicates, preserving first-seen order.
pub fn dedup_seeds(seeds: &[SeedRating]) -> Vec<SeedRating> {
    let mut seen: HashSet<(&str, u64)> = HashSet::with_capacity(seeds.len());
    let mut working_set = Vec::with_capacity(seeds.len());
    for seed in seeds {
        if seen.insert(seed.key()) {
            working_set.push(seed.clone());
        }
    }
    working_set
}

/// The set of titles the caller has already rated.
///
/// Used by the scorer to keep seed titles out of the candidate pool:
/// a user is never recommended a movie they rated themselves.
pub fn seed_title_set(seeds: &[SeedRating]) -> HashSet<&str> {
    seeds.iter().map(|s| s.title.as_str()).collect()
}
