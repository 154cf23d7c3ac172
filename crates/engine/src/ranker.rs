//! Ranking and payload resolution.
//!
//! Candidates sort by descending score with catalog order as the
//! tie-break: the sort is stable and the scorer emits candidates in
//! catalog order, so equal scores keep their load positions. That
//! makes the full pipeline deterministic: identical seed lists always
//! produce byte-identical output, which the test suite relies on.

use crate::scorer::ScoredCandidate;
use catalog::Catalog;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Result-set cap at the public boundary.
pub const MAX_RECOMMENDATIONS: usize = 10;

/// The ranked payload returned to the caller: three sequences aligned
/// by index, each at most [`MAX_RECOMMENDATIONS`] long. A movie with
/// no IMDB id gets an empty string in `imdb_ids`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub titles: Vec<String>,
    pub genres: Vec<Vec<String>>,
    pub imdb_ids: Vec<String>,
}

impl Recommendations {
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

/// Order candidates by descending score and keep the best `limit`.
///
/// Expects input in catalog order (the scorer's output); the stable
/// sort then gives first-loaded-first among equal scores. Fewer than
/// `limit` candidates just yields a shorter list, never padding.
pub fn rank(mut candidates: Vec<ScoredCandidate>, limit: usize) -> Vec<ScoredCandidate> {
    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    candidates.truncate(limit);
    candidates
}

/// Resolve ranked rows into the response payload.
pub fn resolve(catalog: &Catalog, ranked: &[ScoredCandidate]) -> Recommendations {
    let mut recommendations = Recommendations::default();
    for candidate in ranked {
        let Some(movie) = catalog.get(candidate.row) else {
            continue;
        };
        recommendations.titles.push(movie.title.clone());
        recommendations.genres.push(movie.genres.clone());
        recommendations
            .imdb_ids
            .push(movie.imdb_id.clone().unwrap_or_default());
    }
    recommendations
}
