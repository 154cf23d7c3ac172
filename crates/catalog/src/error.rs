//! Error types for the catalog crate.
//!
//! A catalog that fails to load is a startup failure for the whole
//! process, so every variant here is fatal to the caller. Per-request
//! conditions (unknown seed titles, empty profiles) are not errors and
//! never appear in this enum.

use thiserror::Error;

/// Errors that can occur while loading and parsing the movie catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be found or opened
    #[error("Failed to open catalog file {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    /// I/O error occurred while reading the file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A row in the catalog file couldn't be parsed
    ///
    /// `line` is the 1-based line in the source file, header included,
    /// so it can be pasted straight into an editor.
    #[error("Parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// A field had a value the catalog cannot accept
    #[error("Invalid value for {field}: {value:?}")]
    InvalidValue { field: String, value: String },

    /// Catalog-level validation failed after parsing
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
