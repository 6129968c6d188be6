//! The search index: an immutable catalog snapshot plus the options it was built with.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::options::SearchOptions;
use crate::path::Document;
use crate::score::{score_of, Score};

/// Catalogs at least this large are scored on the rayon pool.
#[cfg(feature = "parallel")]
pub const PARALLEL_MIN_ITEMS: usize = 512;

/// Items an index can hold.
#[cfg(feature = "parallel")]
pub trait Searchable: Document + Send + Sync {}
#[cfg(feature = "parallel")]
impl<T: Document + Send + Sync> Searchable for T {}

/// Items an index can hold.
#[cfg(not(feature = "parallel"))]
pub trait Searchable: Document {}
#[cfg(not(feature = "parallel"))]
impl<T: Document> Searchable for T {}

/// Search result with its catalog position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult<T> {
    /// The matched item
    pub item: T,
    /// Best score across keys (lower is better), when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
    /// Position of the item in the catalog the index was built from
    #[serde(rename = "refIndex")]
    pub ref_index: usize,
}

impl<T> SearchResult<T> {
    /// Maps the item, keeping score and position.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SearchResult<U> {
        SearchResult {
            item: f(self.item),
            score: self.score,
            ref_index: self.ref_index,
        }
    }
}

/// A scored catalog position, before the item is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Hit {
    ref_index: usize,
    score: Score,
}

/// Ranking order: ascending score. Used with a stable sort, so equal scores
/// keep catalog order.
fn rank_order(a: &Hit, b: &Hit) -> Ordering {
    a.score.compare(&b.score)
}

/// Fuzzy search over a fixed catalog.
///
/// The index never changes after [`SearchIndex::build`]; a new catalog
/// version means a new index (see [`SearchIndex::rebuild`]).
#[derive(Debug, Clone)]
pub struct SearchIndex<T> {
    items: Vec<T>,
    /// Lowercased value of each configured key, per item; `None` when absent
    fields: Vec<Box<[Option<String>]>>,
    options: SearchOptions,
}

impl<T: Searchable> SearchIndex<T> {
    /// Build an index over `catalog`.
    ///
    /// Field values are resolved and lowercased once here; searching reads
    /// only these prepared values.
    pub fn build(catalog: Vec<T>, options: SearchOptions) -> Self {
        let fields: Vec<Box<[Option<String>]>> = catalog
            .iter()
            .map(|item| {
                options
                    .keys
                    .iter()
                    .map(|key| item.resolve(key).map(str::to_lowercase))
                    .collect()
            })
            .collect();

        tracing::debug!(
            items = catalog.len(),
            keys = options.keys.len(),
            threshold = options.threshold,
            "Search index built"
        );

        Self {
            items: catalog,
            fields,
            options,
        }
    }

    /// Replace the catalog, keeping the options.
    pub fn rebuild(self, catalog: Vec<T>) -> Self {
        Self::build(catalog, self.options)
    }

    /// Search the catalog.
    ///
    /// Returns every item whose best per-key score is strictly below the
    /// threshold, best first; equal scores keep catalog order. Empty queries
    /// and queries shorter than `min_match_char_length` return nothing.
    pub fn search(&self, query: &str) -> Vec<SearchResult<&T>> {
        if query.is_empty() || query.chars().count() < self.options.min_match_char_length {
            return Vec::new();
        }

        let pattern = query.to_lowercase();
        let threshold = self.options.threshold;

        let mut hits: Vec<Hit> = self
            .score_all(&pattern)
            .into_iter()
            .enumerate()
            .filter_map(|(ref_index, best)| {
                best.filter(|s| s.passes(threshold))
                    .map(|score| Hit { ref_index, score })
            })
            .collect();

        hits.sort_by(rank_order);

        tracing::trace!(query = %query, matches = hits.len(), "Search completed");

        let include_score = self.options.include_score;
        hits.into_iter()
            .map(|hit| SearchResult {
                item: &self.items[hit.ref_index],
                score: include_score.then_some(hit.score),
                ref_index: hit.ref_index,
            })
            .collect()
    }

    /// Best score of the item at `ref_index` for an already-lowercased pattern.
    ///
    /// `None` when the position is out of range or none of the configured
    /// keys resolve on the item.
    pub fn score_at(&self, ref_index: usize, pattern: &str) -> Option<Score> {
        self.fields.get(ref_index).and_then(|f| best_score(pattern, f))
    }

    /// Best score of every item, in catalog order.
    fn score_all(&self, pattern: &str) -> Vec<Option<Score>> {
        #[cfg(feature = "parallel")]
        {
            if self.fields.len() >= PARALLEL_MIN_ITEMS {
                use rayon::prelude::*;
                return self
                    .fields
                    .par_iter()
                    .map(|fields| best_score(pattern, fields))
                    .collect();
            }
        }

        self.score_all_sequential(pattern)
    }

    fn score_all_sequential(&self, pattern: &str) -> Vec<Option<Score>> {
        self.fields
            .iter()
            .map(|fields| best_score(pattern, fields))
            .collect()
    }
}

impl<T> SearchIndex<T> {
    /// The catalog, in its original order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Options the index was built with.
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Number of indexed items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Gives the catalog back.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Minimum score across the present fields; `None` if no field is present.
fn best_score(pattern: &str, fields: &[Option<String>]) -> Option<Score> {
    fields
        .iter()
        .flatten()
        .map(|value| score_of(pattern, value))
        .reduce(Score::best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Item;
    use serde_json::json;

    fn tools() -> Vec<Item> {
        vec![
            Item::new("json-formatter", "JSON Formatter", "Format and beautify JSON", "JSON", "/json/json-formatter"),
            Item::new("json-validator", "JSON Validator", "Check JSON syntax", "JSON", "/json/json-validator"),
            Item::new("meta-tags", "Meta Tag Generator", "Generate SEO meta tags", "SEO", "/seo-tools/meta-tags"),
            Item::new("base64", "Base64 Encoder", "Encode text to Base64", "Converters", "/conversiontools/base64"),
        ]
    }

    fn ids<'a>(results: &[SearchResult<&'a Item>]) -> Vec<&'a str> {
        results.iter().map(|r| r.item.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query() {
        let index = SearchIndex::build(tools(), SearchOptions::default());
        assert!(index.search("").is_empty());
    }

    #[test]
    fn test_below_min_length() {
        let index = SearchIndex::build(tools(), SearchOptions::default().with_min_match_char_length(2));
        assert!(index.search("j").is_empty());
        assert!(!index.search("js").is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let index = SearchIndex::build(tools(), SearchOptions::default());
        assert_eq!(ids(&index.search("JSON")), ids(&index.search("json")));
    }

    #[test]
    fn test_substring_ranks_first() {
        let options = SearchOptions::default().with_include_score(true);
        let index = SearchIndex::build(tools(), options);
        let results = index.search("json");

        assert_eq!(ids(&results), ["json-formatter", "json-validator"]);
        assert!(results.iter().all(|r| r.score == Some(Score::SUBSTRING)));
    }

    #[test]
    fn test_scores_hidden_by_default() {
        let index = SearchIndex::build(tools(), SearchOptions::default());
        assert!(index.search("json").iter().all(|r| r.score.is_none()));
    }

    #[test]
    fn test_ref_index_is_catalog_position() {
        let index = SearchIndex::build(tools(), SearchOptions::default());
        let results = index.search("base64");
        // "Format and beautify JSON" picks up b-a-s as a subsequence too.
        assert_eq!(ids(&results), ["base64", "json-formatter"]);
        assert_eq!(results[0].ref_index, 3);
        assert_eq!(results[1].ref_index, 0);
    }

    #[test]
    fn test_empty_keys_match_nothing() {
        let options = SearchOptions::default().with_keys(Vec::<&str>::new()).with_threshold(5.0);
        let index = SearchIndex::build(tools(), options);
        assert!(index.search("json").is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let index: SearchIndex<Item> = SearchIndex::build(Vec::new(), SearchOptions::default());
        assert!(index.search("json").is_empty());
        assert!(index.is_empty());
    }

    #[test]
    fn test_json_values_as_documents() {
        let catalog = vec![
            json!({"title": "Word Counter", "meta": {"tags": "text"}}),
            json!({"title": 42, "meta": {"tags": "counter"}}),
        ];
        let options = SearchOptions::default()
            .with_keys(["title", "meta.tags"])
            .with_include_score(true);
        let index = SearchIndex::build(catalog, options);

        let results = index.search("counter");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].ref_index, 0);
        assert_eq!(results[1].ref_index, 1);
    }

    #[test]
    fn test_rebuild_keeps_options() {
        let options = SearchOptions::default().with_threshold(0.2);
        let index = SearchIndex::build(tools(), options.clone());
        let index = index.rebuild(tools()[..1].to_vec());
        assert_eq!(index.len(), 1);
        assert_eq!(index.options(), &options);
    }

    #[test]
    fn test_score_at() {
        let index = SearchIndex::build(tools(), SearchOptions::default());
        assert_eq!(index.score_at(0, "json"), Some(Score::SUBSTRING));
        assert_eq!(index.score_at(99, "json"), None);
    }

    #[test]
    fn test_result_serializes_ref_index() {
        let index = SearchIndex::build(tools(), SearchOptions::default().with_include_score(true));
        let json = serde_json::to_value(&index.search("base64")[0]).unwrap();
        assert_eq!(json["refIndex"], 3);
        assert_eq!(json["score"], 0.1);
        assert_eq!(json["item"]["id"], "base64");
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let catalog: Vec<Item> = (0..PARALLEL_MIN_ITEMS * 2)
            .map(|i| {
                let title = format!("Tool {} {}", i, ["json", "yaml", "csv", "seo"][i % 4]);
                Item::new(i.to_string(), title, "converter", "Misc", format!("/t/{}", i))
            })
            .collect();
        let index = SearchIndex::build(catalog, SearchOptions::default());

        for query in ["json", "tl", "sqz", "1 y"] {
            assert_eq!(index.score_all(query), index.score_all_sequential(query));
        }
    }
}
