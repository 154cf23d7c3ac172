//! Facet profile building.
//!
//! A profile is a weighted frequency map over facet values: for every
//! seed title found in the catalog, each of the movie's facet values
//! (its genres, its directors, or its actors) accumulates that seed's
//! rating. The profile is built fresh per request and never persisted.

use crate::seed::{SeedRating, dedup_seeds};
use catalog::{Catalog, Facet};
use std::collections::HashMap;
use tracing::debug;

/// Weighted frequency map from facet value to accumulated rating.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetProfile {
    weights: HashMap<String, f64>,
}

impl FacetProfile {
    /// Build a profile for one facet from the caller's seed list.
    ///
    /// Seeds are deduplicated by exact `(title, rating)` pair first.
    /// Titles with no catalog match contribute nothing and are skipped
    /// silently; an empty or all-unknown seed list yields an empty
    /// profile, which downstream scoring handles as all-zero scores.
    pub fn build(catalog: &Catalog, seeds: &[SeedRating], facet: Facet) -> Self {
        let working_set = dedup_seeds(seeds);
        let mut weights: HashMap<String, f64> = HashMap::new();

        for seed in &working_set {
            let Some((_, movie)) = catalog.get_by_title(&seed.title) else {
                debug!(title = %seed.title, "seed title not in catalog, skipping");
                continue;
            };
            for value in movie.facet_values(facet) {
                *weights.entry(value.clone()).or_insert(0.0) += seed.rating;
            }
        }

        debug!(
            facet = %facet,
            seeds = working_set.len(),
            values = weights.len(),
            "built facet profile"
        );
        Self { weights }
    }

    /// Accumulated weight for one facet value, 0 if absent.
    pub fn weight(&self, value: &str) -> f64 {
        self.weights.get(value).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// The `n` heaviest facet values, weight-descending with a
    /// name tie-break so the order is stable for display.
    pub fn top_values(&self, n: usize) -> Vec<(&str, f64)> {
        let mut values: Vec<(&str, f64)> = self
            .weights
            .iter()
            .map(|(value, &weight)| (value.as_str(), weight))
            .collect();
        values.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        values.truncate(n);
        values
    }
}
