//! Parser for the movie catalog file.
//!
//! The catalog is a CSV file with the header
//! `title,genres,director,actors,imdb_id`. Multi-valued fields pack
//! several values into one (quoted) cell:
//! - `genres` are pipe-delimited (`Comedy|Drama`); a few source files
//!   use commas instead, so both delimiters are accepted
//! - `director` and `actors` are comma-delimited name lists
//!
//! Extra columns are ignored, and missing multi-value cells parse to
//! empty lists. A missing or unreadable file is a fatal load error;
//! the process cannot serve recommendations without a catalog.

use crate::error::{CatalogError, Result};
use crate::types::{Catalog, MovieRecord};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;
use tracing::info;

/// One catalog row exactly as it appears in the CSV file.
#[derive(Debug, Deserialize)]
struct RawRow {
    title: String,
    #[serde(default)]
    genres: String,
    #[serde(default)]
    director: String,
    #[serde(default)]
    actors: String,
    #[serde(default)]
    imdb_id: String,
}

/// Parse the catalog file at `path` into records, in file order.
pub fn parse_catalog(path: &Path) -> Result<Vec<MovieRecord>> {
    let file = File::open(path).map_err(|source| CatalogError::Open {
        path: path.display().to_string(),
        source,
    })?;
    parse_catalog_reader(file)
}

/// Parse catalog CSV from any reader.
///
/// Split out from [`parse_catalog`] so tests can parse string literals
/// without touching the filesystem.
pub fn parse_catalog_reader<R: std::io::Read>(input: R) -> Result<Vec<MovieRecord>> {
    let mut reader = csv::Reader::from_reader(input);
    let mut records = Vec::new();

    for (idx, row) in reader.deserialize::<RawRow>().enumerate() {
        // Line 1 of the file is the header.
        let line = idx + 2;
        let raw = row.map_err(|e| CatalogError::Parse {
            line,
            reason: e.to_string(),
        })?;

        let title = raw.title.trim();
        if title.is_empty() {
            return Err(CatalogError::Parse {
                line,
                reason: "empty title".to_string(),
            });
        }

        records.push(MovieRecord {
            title: title.to_string(),
            genres: split_genres(&raw.genres),
            directors: split_names(&raw.director),
            actors: split_names(&raw.actors),
            imdb_id: optional_field(&raw.imdb_id),
        });
    }

    Ok(records)
}

impl Catalog {
    /// Load the catalog from a CSV file.
    ///
    /// This is the main entry point, called once at process start. A
    /// catalog with no rows fails validation: it would make every
    /// recommendation silently empty, which is a configuration mistake
    /// we want surfaced at startup.
    pub fn load_from_csv(path: &Path) -> Result<Self> {
        let records = parse_catalog(path)?;
        if records.is_empty() {
            return Err(CatalogError::Validation(format!(
                "catalog {} contains no rows",
                path.display()
            )));
        }

        let catalog = Catalog::from_records(records);
        info!(
            rows = catalog.len(),
            path = %path.display(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}

/// Split a genre cell on both accepted delimiters.
fn split_genres(cell: &str) -> Vec<String> {
    cell.split(['|', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a comma-delimited name list (directors, actors).
fn split_names(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// An empty or whitespace-only cell means the value is absent.
fn optional_field(cell: &str) -> Option<String> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
