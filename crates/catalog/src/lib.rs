//! # Catalog Crate
//!
//! This crate owns the static movie catalog: loading it from CSV,
//! holding it in memory for the lifetime of the process, and answering
//! lookups against it.
//!
//! ## Main Components
//!
//! - **types**: `MovieRecord`, the `Facet` selectors, and the `Catalog`
//!   container (rows in file order + a title index)
//! - **parser**: CSV parsing into records
//! - **search**: substring search used by the catalog-lookup UI
//! - **error**: error types for catalog loading
//!
//! The catalog is loaded once at startup and is read-only afterwards,
//! so it can be shared across concurrent requests behind an `Arc`
//! without locking. If hot reloads are ever needed, build the new
//! catalog off to the side and swap the `Arc`, never mutate in place.
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_csv(Path::new("data/movies.csv"))?;
//!
//! let (row, movie) = catalog.get_by_title("Batman (1989)").unwrap();
//! println!("row {} has genres {:?}", row, movie.genres);
//! ```

// Public modules
pub mod error;
pub mod parser;
pub mod search;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use search::{SEARCH_RESULT_LIMIT, SearchField, search, search_top_ten};
pub use types::{Catalog, Facet, FacetSelection, MovieRecord};
