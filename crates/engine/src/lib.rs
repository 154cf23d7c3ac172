//! # Engine Crate
//!
//! The item-based recommendation core: seed handling, facet profile
//! building, candidate scoring, and ranking. Everything here is a pure
//! function of the catalog and the request (no I/O, no shared mutable
//! state), so concurrent requests can run against one shared catalog
//! without locks.
//!
//! ## Pipeline
//!
//! 1. **seed**: dedup the caller's `(title, rating)` pairs
//! 2. **profile**: accumulate rating weight per facet value
//! 3. **scorer**: weighted-overlap score for every non-seed row
//! 4. **ranker**: stable descending sort, truncate, resolve payload
//!
//! ## Example Usage
//!
//! ```ignore
//! use engine::{SeedRating, recommend_facet, resolve};
//! use catalog::{Catalog, Facet};
//!
//! let seeds = vec![SeedRating::new("The Hangover (2009)", 5.0)];
//! let ranked = recommend_facet(&catalog, &seeds, Facet::Genre, 10);
//! let payload = resolve(&catalog, &ranked);
//! println!("{:?}", payload.titles);
//! ```

// Public modules
pub mod profile;
pub mod ranker;
pub mod scorer;
pub mod seed;

// Re-export commonly used types
pub use profile::FacetProfile;
pub use ranker::{MAX_RECOMMENDATIONS, Recommendations, rank, resolve};
pub use scorer::{ScoredCandidate, score_candidates};
pub use seed::{SeedRating, dedup_seeds, seed_title_set};

use catalog::{Catalog, Facet};
use tracing::instrument;

/// Run the full single-facet pipeline: dedup, profile, score, rank.
///
/// Returns the top `limit` candidates as `(row, score)` pairs; callers
/// that need the response payload resolve them with [`resolve`], and
/// the blend coordinator merges them raw across facets.
#[instrument(skip(catalog, seeds), fields(seed_count = seeds.len()))]
pub fn recommend_facet(
    catalog: &Catalog,
    seeds: &[SeedRating],
    facet: Facet,
    limit: usize,
) -> Vec<ScoredCandidate> {
    let working_set = dedup_seeds(seeds);
    let profile = FacetProfile::build(catalog, &working_set, facet);
    let seed_titles = seed_title_set(&working_set);
    let candidates = score_candidates(catalog, &profile, facet, &seed_titles);
    rank(candidates, limit)
}
