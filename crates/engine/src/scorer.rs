//! Candidate scoring: weighted overlap of catalog rows with a profile.
//!
//! Every catalog row whose title is not in the seed set is a
//! candidate. A candidate's score is the sum of the profile weights of
//! its facet values, a dot product over sparse categorical features.
//! No normalisation by catalog frequency and no TF-IDF: the score is
//! intentionally simple so the calling UI can explain it.
//!
//! Zero-scoring rows stay in the candidate list (they rank last);
//! only seed titles are excluded outright.

use crate::profile::FacetProfile;
use catalog::{Catalog, Facet};
use rayon::prelude::*;
use std::collections::HashSet;
use tracing::debug;

/// One scored catalog row.
///
/// `row` is the catalog load position. It doubles as the deterministic
/// tie-break key during ranking, so it must come from catalog order,
/// never from an intermediate container with unstable iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate {
    pub row: usize,
    pub score: f64,
}

/// Score every non-seed catalog row against the profile.
///
/// The scan is data-parallel across rows, but the returned vector is
/// in catalog order; identical inputs always produce an identical
/// candidate sequence.
pub fn score_candidates(
    catalog: &Catalog,
    profile: &FacetProfile,
    facet: Facet,
    seed_titles: &HashSet<&str>,
) -> Vec<ScoredCandidate> {
    let candidates: Vec<ScoredCandidate> = catalog
        .records()
        .par_iter()
        .enumerate()
        .filter(|(_, movie)| !seed_titles.contains(movie.title.as_str()))
        .map(|(row, movie)| {
            let score = movie
                .facet_values(facet)
                .iter()
                .map(|value| profile.weight(value))
                .sum();
            ScoredCandidate { row, score }
        })
        .collect();

    debug!(
        facet = %facet,
        candidates = candidates.len(),
        "scored catalog against profile"
    );
    candidates
}
