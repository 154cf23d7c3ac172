//! # Recommendation Orchestrator
//!
//! Coordinates one recommendation request end to end:
//! 1. Validate the seed list (malformed ratings fail fast)
//! 2. Run the facet pipeline; for the blended "all" mode, fan
//!    out to the genre, director, and actor pipelines concurrently
//! 3. Merge the per-facet rankings into one consensus ordering
//! 4. Resolve the winning rows into the response payload
//!
//! The catalog is shared behind an `Arc` and read-only, so any number
//! of requests can score against it at once; each request builds its
//! own profile and candidate set on its own stack.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::info;

use catalog::{Catalog, Facet, FacetSelection};
use engine::{
    MAX_RECOMMENDATIONS, Recommendations, ScoredCandidate, SeedRating, recommend_facet, resolve,
};

/// Main orchestrator exposed to the transport layer.
#[derive(Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Serve one recommendation request.
    ///
    /// An empty seed list is tolerated (the result degenerates to
    /// catalog order with zero scores); a seed with a non-finite or
    /// negative rating is a contract violation and rejected up front.
    pub async fn recommend(
        &self,
        selection: FacetSelection,
        seeds: &[SeedRating],
    ) -> Result<Recommendations> {
        validate_seeds(seeds)?;
        let start = Instant::now();

        let ranked = match selection {
            FacetSelection::Single(facet) => self.run_facet(facet, seeds.to_vec()).await?,
            FacetSelection::All => self.blend(seeds.to_vec()).await?,
        };

        let payload = resolve(&self.catalog, &ranked);
        info!(
            selection = %selection,
            seeds = seeds.len(),
            results = payload.len(),
            elapsed = ?start.elapsed(),
            "recommendation request served"
        );
        Ok(payload)
    }

    /// Run one facet pipeline off the async runtime's worker threads.
    ///
    /// Scoring is CPU-bound (a full catalog scan), so it goes through
    /// `spawn_blocking` rather than stalling the executor.
    async fn run_facet(&self, facet: Facet, seeds: Vec<SeedRating>) -> Result<Vec<ScoredCandidate>> {
        let catalog = Arc::clone(&self.catalog);
        tokio::task::spawn_blocking(move || {
            recommend_facet(&catalog, &seeds, facet, MAX_RECOMMENDATIONS)
        })
        .await
        .context("facet scoring task panicked")
    }

    /// The "all" mode: run every facet pipeline over the same seed
    /// list concurrently, then merge the three top lists.
    async fn blend(&self, seeds: Vec<SeedRating>) -> Result<Vec<ScoredCandidate>> {
        let (genre, director, actor) = tokio::join!(
            self.run_facet(Facet::Genre, seeds.clone()),
            self.run_facet(Facet::Director, seeds.clone()),
            self.run_facet(Facet::Actor, seeds),
        );
        Ok(merge_facet_lists([genre?, director?, actor?]))
    }
}

fn validate_seeds(seeds: &[SeedRating]) -> Result<()> {
    for seed in seeds {
        if !seed.rating.is_finite() || seed.rating < 0.0 {
            bail!(
                "invalid rating {} for seed {:?}: ratings must be finite and non-negative",
                seed.rating,
                seed.title
            );
        }
    }
    Ok(())
}

/// Merge per-facet rankings by summing scores per catalog row.
///
/// A title surfaced by several facets accumulates all of their scores,
/// so agreement across independent signals outranks a single strong
/// signal of the same magnitude. Ties break on catalog row position,
/// the same rule the per-facet ranker uses.
fn merge_facet_lists(lists: [Vec<ScoredCandidate>; 3]) -> Vec<ScoredCandidate> {
    let mut combined: HashMap<usize, f64> = HashMap::new();
    for candidate in lists.into_iter().flatten() {
        *combined.entry(candidate.row).or_insert(0.0) += candidate.score;
    }

    let mut merged: Vec<ScoredCandidate> = combined
        .into_iter()
        .map(|(row, score)| ScoredCandidate { row, score })
        .collect();
    // The HashMap scrambled row order, so the tie-break must be
    // explicit here rather than relying on sort stability.
    merged.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.row.cmp(&b.row))
    });
    merged.truncate(MAX_RECOMMENDATIONS);
    merged
}
