//! Ranking and filtering behaviour of the search index.

use fixtools_search::{score_of, Item, Score, SearchIndex, SearchOptions, SearchResult};
use serde_json::json;

// ============================================================================
// Test Helpers
// ============================================================================

fn catalog() -> Vec<Item> {
    vec![
        Item::new("js-minifier", "JS Minifier", "Shrink scripts", "Minifiers", "/minify/js"),
        Item::new("json-formatter", "JSON Formatter", "Beautify data", "JSON", "/json/json-formatter"),
        Item::new("css-minifier", "CSS Minifier", "Shrink stylesheets", "Minifiers", "/minify/css"),
        Item::new("html-minifier", "HTML Minifier", "Shrink markup", "Minifiers", "/minify/html"),
        Item::new("word-counter", "Word Counter", "Count words", "Text", "/text/word-counter"),
    ]
}

fn scored(options: SearchOptions) -> SearchOptions {
    options.with_include_score(true)
}

fn ids<'a>(results: &[SearchResult<&'a Item>]) -> Vec<&'a str> {
    results.iter().map(|r| r.item.id.as_str()).collect()
}

// ============================================================================
// Query Preconditions
// ============================================================================

#[test]
fn test_empty_query_returns_nothing() {
    let index = SearchIndex::build(catalog(), SearchOptions::default());
    assert!(index.search("").is_empty());
}

#[test]
fn test_empty_query_with_zero_min_length() {
    let index = SearchIndex::build(catalog(), SearchOptions::default().with_min_match_char_length(0));
    assert!(index.search("").is_empty());
}

#[test]
fn test_query_below_min_length_returns_nothing() {
    let index = SearchIndex::build(catalog(), SearchOptions::default().with_min_match_char_length(2));
    assert!(index.search("a").is_empty());
}

#[test]
fn test_min_length_counts_characters_not_bytes() {
    let items = vec![Item::new("e", "Éé", "", "", "/e")];
    let index = SearchIndex::build(items, SearchOptions::default().with_min_match_char_length(2));
    // Two characters, four bytes.
    assert_eq!(index.search("éé").len(), 1);
    assert!(index.search("é").is_empty());
}

// ============================================================================
// Scoring
// ============================================================================

#[test]
fn test_exact_substring_ranks_ahead_of_partial_subsequence() {
    let index = SearchIndex::build(catalog(), scored(SearchOptions::default()));
    let results = index.search("json");

    assert_eq!(ids(&results), ["json-formatter", "js-minifier"]);
    assert_eq!(results[0].score, Some(Score::SUBSTRING));
    // "js minifier" consumes 'j' and 's', then waits for an 'o' that never comes.
    assert_eq!(results[1].score, Some(Score::new(0.5)));
}

#[test]
fn test_subsequence_scores_are_characterized() {
    assert_eq!(score_of("ace", "abcdef").value(), 0.0);
    // Greedy scan: 'a' consumed, then it waits for 'e', passing 'c' by.
    assert_eq!(score_of("aec", "abcdef").value(), 1.0 - 2.0 / 3.0);
    assert_eq!(score_of("eca", "abcdef").value(), 1.0 - 1.0 / 3.0);
    assert_eq!(score_of("zzz", "abcdef").value(), 1.0);
}

#[test]
fn test_matching_is_case_insensitive() {
    let index = SearchIndex::build(catalog(), scored(SearchOptions::default()));
    assert_eq!(index.search("WORD COUNTER"), index.search("word counter"));
    assert_eq!(index.search("Word")[0].score, Some(Score::SUBSTRING));
}

#[test]
fn test_best_key_wins() {
    let items = vec![Item::new("x", "Nothing here", "contains qrs", "Misc", "/x")];
    let index = SearchIndex::build(items, scored(SearchOptions::default()));
    assert_eq!(index.search("qrs")[0].score, Some(Score::SUBSTRING));
}

// ============================================================================
// Threshold
// ============================================================================

#[test]
fn test_score_equal_to_threshold_is_excluded() {
    // "js minifier" scores exactly 0.5 for "json".
    let index = SearchIndex::build(catalog(), SearchOptions::default().with_threshold(0.5));
    assert_eq!(ids(&index.search("json")), ["json-formatter"]);

    let index = SearchIndex::build(catalog(), SearchOptions::default().with_threshold(0.500001));
    assert_eq!(ids(&index.search("json")), ["json-formatter", "js-minifier"]);
}

#[test]
fn test_threshold_one_keeps_any_character_match() {
    let items = vec![
        Item::new("a", "abc", "", "", "/a"),
        Item::new("b", "zzz", "yyy", "xxx", "/b"),
        Item { title: None, ..Item::new("c", "", "xaq", "", "/c") },
    ];
    let index = SearchIndex::build(items, scored(SearchOptions::default().with_threshold(1.0)));
    let results = index.search("aq");

    // "abc" consumes only 'a'; "xaq" contains the query; "zzz"/"yyy"/"xxx" share nothing.
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].item.id, "c");
    assert_eq!(results[1].item.id, "a");
}

#[test]
fn test_zero_threshold_matches_nothing() {
    let index = SearchIndex::build(catalog(), SearchOptions::default().with_threshold(0.0));
    assert!(index.search("json").is_empty());
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_ties_keep_catalog_order() {
    let index = SearchIndex::build(catalog(), scored(SearchOptions::default()));
    let results = index.search("minifier");

    assert_eq!(ids(&results), ["js-minifier", "css-minifier", "html-minifier"]);
    assert!(results.iter().all(|r| r.score == Some(Score::SUBSTRING)));
}

#[test]
fn test_results_sorted_ascending() {
    let index = SearchIndex::build(catalog(), scored(SearchOptions::default().with_threshold(1.0)));
    let results = index.search("mnfr");
    let scores: Vec<Score> = results.iter().filter_map(|r| r.score).collect();
    assert!(scores.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_ref_index_survives_reordering() {
    let items = catalog();
    let index = SearchIndex::build(items.clone(), SearchOptions::default());
    for result in index.search("json") {
        assert_eq!(&items[result.ref_index], result.item);
    }
}

// ============================================================================
// Field Resolution
// ============================================================================

#[test]
fn test_missing_key_is_skipped() {
    let items = vec![
        Item { category: None, ..Item::new("no-cat", "Color Picker", "Pick colors", "", "/c") },
        Item::new("with-cat", "Other", "Other", "Color", "/o"),
    ];
    let index = SearchIndex::build(items, scored(SearchOptions::default()));
    let results = index.search("color");

    assert_eq!(ids(&results), ["no-cat", "with-cat"]);
}

#[test]
fn test_dotted_keys_over_json_records() {
    let records = vec![
        json!({"title": "UUID Generator", "meta": {"keywords": "guid random"}}),
        json!({"title": "Lorem Ipsum", "meta": "not an object"}),
        json!({"title": "Hash Tool"}),
    ];
    let options = scored(SearchOptions::default().with_keys(["meta.keywords", "title"]));
    let index = SearchIndex::build(records, options);

    let results = index.search("guid");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item["title"], "UUID Generator");
    assert_eq!(results[0].ref_index, 0);
}

#[test]
fn test_empty_keys_never_match() {
    let options = SearchOptions::default().with_keys(Vec::<String>::new()).with_threshold(2.0);
    let index = SearchIndex::build(catalog(), options);
    assert!(index.search("json").is_empty());
}

#[test]
fn test_extra_members_searchable() {
    let items = vec![
        Item::new("jwt", "JWT Decoder", "Decode tokens", "Security", "/security/jwt")
            .with_extra("aliases", json!("json web token")),
    ];
    let options = scored(SearchOptions::default().with_keys(["aliases"]));
    let index = SearchIndex::build(items, options);
    assert_eq!(index.search("web token")[0].score, Some(Score::SUBSTRING));
}

// ============================================================================
// Purity
// ============================================================================

#[test]
fn test_search_is_idempotent() {
    let index = SearchIndex::build(catalog(), scored(SearchOptions::default()));
    assert_eq!(index.search("mini"), index.search("mini"));
}

#[test]
fn test_search_leaves_catalog_untouched() {
    let index = SearchIndex::build(catalog(), SearchOptions::default());
    let _ = index.search("json");
    assert_eq!(index.items(), catalog().as_slice());
}

#[test]
fn test_concurrent_searches() {
    let index = SearchIndex::build(catalog(), scored(SearchOptions::default()));
    let expected = index.search("minifier");

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| index.search("minifier"))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
