//! Client-side fuzzy search for the Fixtools site.
//!
//! This crate provides:
//! - A linear-scan search index over a fixed tool catalog
//! - Greedy subsequence scoring with a substring fast path
//! - Dotted-path field lookup over JSON records
//! - Catalog loading and validation
//! - WASM bindings for the search modal
//!
//! # Example
//!
//! ```
//! use fixtools_search::{Item, SearchIndex, SearchOptions, DEFAULT_RESULT_LIMIT};
//!
//! let catalog = vec![
//!     Item::new("json-formatter", "JSON Formatter", "Pretty print JSON", "JSON", "/json/json-formatter"),
//!     Item::new("meta-tags", "Meta Tag Generator", "Generate SEO tags", "SEO", "/seo-tools/meta-tags"),
//! ];
//!
//! let index = SearchIndex::build(catalog, SearchOptions::default().with_include_score(true));
//! let mut results = index.search("json");
//! results.truncate(DEFAULT_RESULT_LIMIT);
//!
//! assert_eq!(results[0].item.id, "json-formatter");
//! assert_eq!(results[0].score.map(|s| s.value()), Some(0.1));
//! ```

mod error;
mod fuzzy;
mod index;
mod options;
mod score;
pub mod catalog;
pub mod path;

#[cfg(feature = "wasm")]
mod wasm;

pub use catalog::{Catalog, CatalogIssue, Item};
pub use error::{Result, SearchError, SearchErrorCode};
pub use fuzzy::{greedy_match_count, is_subsequence};
pub use index::{SearchIndex, SearchResult, Searchable};
pub use options::{SearchOptions, DEFAULT_MIN_MATCH_CHAR_LENGTH, DEFAULT_RESULT_LIMIT, DEFAULT_THRESHOLD};
pub use path::{Document, FieldPath};
pub use score::{score_of, Score};

#[cfg(feature = "parallel")]
pub use index::PARALLEL_MIN_ITEMS;
