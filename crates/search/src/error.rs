//! Error types for the search crate.
//!
//! Searching itself never fails; these cover loading catalogs and options.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while preparing a search index.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Catalog file could not be read
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Catalog JSON has the wrong shape
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Search options could not be parsed
    #[error("Invalid search options: {0}")]
    InvalidOptions(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error code for integration with fixtools-core error handling.
/// Range: 11xxx for search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// Catalog file could not be read
    CatalogIo = 11001,
    /// Catalog JSON has the wrong shape
    InvalidCatalog = 11002,
    /// Search options could not be parsed
    InvalidOptions = 11003,
    /// JSON parsing error
    JsonParsing = 11004,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::Io { .. } => SearchErrorCode::CatalogIo,
            SearchError::InvalidCatalog(_) => SearchErrorCode::InvalidCatalog,
            SearchError::InvalidOptions(_) => SearchErrorCode::InvalidOptions,
            SearchError::Json(_) => SearchErrorCode::JsonParsing,
        }
    }
}
