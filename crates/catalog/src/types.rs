//! Core domain types for the movie catalog.
//!
//! This module defines the record type for one catalog row, the facet
//! selectors used to compare movies, and the `Catalog` container that
//! owns every row for the lifetime of the process.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

// =============================================================================
// Records and facets
// =============================================================================

/// One row of the static movie catalog.
///
/// Immutable after load and shared read-only by every request. The
/// title is the unique key and includes the release year in parens by
/// convention, e.g. `"Batman (1989)"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    /// Genre labels in source order
    pub genres: Vec<String>,
    /// One or more credited directors
    pub directors: Vec<String>,
    /// Credited actors in source order
    pub actors: Vec<String>,
    /// IMDB identifier; absent for some rows
    pub imdb_id: Option<String>,
}

impl MovieRecord {
    /// The values this record carries for one facet.
    ///
    /// A row with a missing field simply has no values for that facet;
    /// it scores zero rather than erroring.
    pub fn facet_values(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Genre => &self.genres,
            Facet::Director => &self.directors,
            Facet::Actor => &self.actors,
        }
    }
}

/// The categorical dimension used to compare movies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facet {
    Genre,
    Director,
    Actor,
}

impl Facet {
    /// All three facets, in the order the blend coordinator runs them.
    pub const ALL: [Facet; 3] = [Facet::Genre, Facet::Director, Facet::Actor];

    pub fn as_str(self) -> &'static str {
        match self {
            Facet::Genre => "genre",
            Facet::Director => "director",
            Facet::Actor => "actor",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the caller asked to recommend on: a single facet, or the
/// blended consensus of all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacetSelection {
    Single(Facet),
    All,
}

impl fmt::Display for FacetSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacetSelection::Single(facet) => facet.fmt(f),
            FacetSelection::All => f.write_str("all"),
        }
    }
}

// =============================================================================
// Catalog - the in-memory movie table
// =============================================================================

/// In-memory movie catalog.
///
/// Rows are kept in file order, with a title index on the side for
/// O(1) seed lookups. Scoring iterates rows front to back and the
/// load position is the deterministic tie-break key for ranking.
#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<MovieRecord>,
    title_index: HashMap<String, usize>,
}

impl Catalog {
    /// Creates a new, empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from already-parsed records, preserving order.
    pub fn from_records(records: Vec<MovieRecord>) -> Self {
        let mut catalog = Self::new();
        for record in records {
            catalog.insert(record);
        }
        catalog
    }

    /// Append a record.
    ///
    /// The first row to claim a title wins the index entry; a later
    /// duplicate still occupies a scan position but is unreachable by
    /// title lookup.
    pub fn insert(&mut self, record: MovieRecord) {
        let row = self.records.len();
        if let Some(&existing) = self.title_index.get(&record.title) {
            warn!(
                title = %record.title,
                first_row = existing,
                duplicate_row = row,
                "duplicate catalog title, keeping first row for lookups"
            );
        } else {
            self.title_index.insert(record.title.clone(), row);
        }
        self.records.push(record);
    }

    /// Get a record by its load position
    pub fn get(&self, row: usize) -> Option<&MovieRecord> {
        self.records.get(row)
    }

    /// Look up a title, returning the row position and the record.
    ///
    /// Titles match exactly, year suffix included.
    pub fn get_by_title(&self, title: &str) -> Option<(usize, &MovieRecord)> {
        let row = *self.title_index.get(title)?;
        Some((row, &self.records[row]))
    }

    /// All rows, in load order
    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    /// Iterate rows in load order
    pub fn iter(&self) -> impl Iterator<Item = &MovieRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
