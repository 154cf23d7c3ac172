//! Substring search over the catalog.
//!
//! This is the catalog-lookup helper the landing UI uses, not the
//! recommendation engine: a case-insensitive linear scan in catalog
//! order. The search runs two passes: first the rows whose chosen
//! field contains the term, then any remaining rows whose *title*
//! contains it, so field matches always rank ahead of the fallback.

use crate::types::{Catalog, Facet};
use std::collections::HashSet;

/// Which field a search term is matched against.
///
/// Anything the caller can't map to a facet falls back to `Title`,
/// mirroring the dropdown this search backs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    Genre,
    Director,
    Actor,
    #[default]
    Title,
}

/// Maximum number of titles returned by [`search_top_ten`].
pub const SEARCH_RESULT_LIMIT: usize = 10;

/// All matching titles, field matches first, each pass in catalog order.
pub fn search(catalog: &Catalog, term: &str, field: SearchField) -> Vec<String> {
    let needle = term.to_lowercase();
    let mut matched_rows: Vec<usize> = Vec::new();
    let mut seen: HashSet<usize> = HashSet::new();

    for (row, movie) in catalog.iter().enumerate() {
        let hit = match field {
            SearchField::Title => movie.title.to_lowercase().contains(&needle),
            SearchField::Genre => any_value_contains(movie.facet_values(Facet::Genre), &needle),
            SearchField::Director => {
                any_value_contains(movie.facet_values(Facet::Director), &needle)
            }
            SearchField::Actor => any_value_contains(movie.facet_values(Facet::Actor), &needle),
        };
        if hit {
            matched_rows.push(row);
            seen.insert(row);
        }
    }

    // Fallback pass: titles containing the term anywhere, minus rows
    // the field pass already found.
    for (row, movie) in catalog.iter().enumerate() {
        if !seen.contains(&row) && movie.title.to_lowercase().contains(&needle) {
            matched_rows.push(row);
        }
    }

    matched_rows
        .into_iter()
        .map(|row| catalog.records()[row].title.clone())
        .collect()
}

/// [`search`], truncated to the first [`SEARCH_RESULT_LIMIT`] titles.
pub fn search_top_ten(catalog: &Catalog, term: &str, field: SearchField) -> Vec<String> {
    let mut results = search(catalog, term, field);
    results.truncate(SEARCH_RESULT_LIMIT);
    results
}

fn any_value_contains(values: &[String], needle: &str) -> bool {
    values.iter().any(|v| v.to_lowercase().contains(needle))
}
