//! Search configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};
use crate::path::FieldPath;

/// Default exclusive score threshold.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Default minimum query length, in characters.
pub const DEFAULT_MIN_MATCH_CHAR_LENGTH: usize = 1;

/// How many results the search modal renders.
pub const DEFAULT_RESULT_LIMIT: usize = 8;

/// Options recognised by [`crate::SearchIndex`].
///
/// Values are accepted as given: a threshold outside `[0, 1]` or an empty
/// key list is not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Fields to search, in order; dotted paths reach nested members
    #[serde(default = "default_keys")]
    pub keys: Vec<FieldPath>,

    /// Items match only when their best score is strictly below this
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Attach the score to each result
    #[serde(default, alias = "includeScore")]
    pub include_score: bool,

    /// Queries shorter than this return nothing
    #[serde(default = "default_min_match_char_length", alias = "minMatchCharLength")]
    pub min_match_char_length: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            keys: default_keys(),
            threshold: default_threshold(),
            include_score: false,
            min_match_char_length: default_min_match_char_length(),
        }
    }
}

impl SearchOptions {
    /// Parse options from JSON, accepting both `snake_case` and `camelCase` names.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SearchError::InvalidOptions(e.to_string()))
    }

    /// Replace the searched keys.
    pub fn with_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<FieldPath>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Set the exclusive score threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Attach scores to results.
    pub fn with_include_score(mut self, include_score: bool) -> Self {
        self.include_score = include_score;
        self
    }

    /// Set the minimum query length.
    pub fn with_min_match_char_length(mut self, len: usize) -> Self {
        self.min_match_char_length = len;
        self
    }
}

fn default_keys() -> Vec<FieldPath> {
    ["title", "desc", "category"].into_iter().map(FieldPath::from).collect()
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_min_match_char_length() -> usize {
    DEFAULT_MIN_MATCH_CHAR_LENGTH
}
