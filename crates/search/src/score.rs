//! Fuzzy-distance scoring for search results.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fuzzy::greedy_match_count;

/// A fuzzy-distance score in `[0, 1]`.
///
/// Lower is better: `0.0` is a perfect subsequence match, `1.0` means no
/// character of the pattern was found.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    /// Every pattern character consumed by the greedy scan
    pub const PERFECT: Score = Score(0.0);
    /// Pattern found as a contiguous substring
    pub const SUBSTRING: Score = Score(0.1);
    /// Nothing matched
    pub const NO_MATCH: Score = Score(1.0);

    /// Wraps a raw score value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw score value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Total order over scores, best (lowest) first.
    #[inline]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }

    /// Returns the better (lower) of two scores.
    #[inline]
    pub fn best(self, other: Self) -> Self {
        if other.compare(&self) == Ordering::Less { other } else { self }
    }

    /// True if this score is accepted under an exclusive `threshold`.
    #[inline]
    pub fn passes(self, threshold: f64) -> bool {
        self.0 < threshold
    }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Score {}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

/// Score `pattern` against `text`.
///
/// Both inputs are expected to be lowercased already. A contiguous substring
/// scores [`Score::SUBSTRING`]; otherwise the score is the fraction of pattern
/// characters the greedy subsequence scan fails to consume.
///
/// # Arguments
/// * `pattern` - The (lowercased) query
/// * `text` - The (lowercased) field value
///
/// # Returns
/// Score in `[0, 1]`, lower is better
pub fn score_of(pattern: &str, text: &str) -> Score {
    if text.contains(pattern) {
        return Score::SUBSTRING;
    }

    let matched = greedy_match_count(pattern, text);
    if matched == 0 {
        return Score::NO_MATCH;
    }

    let len = pattern.chars().count();
    Score(1.0 - matched as f64 / len as f64)
}
