//! Property tests for search invariants.

use fixtools_search::{score_of, Item, Score, SearchIndex, SearchOptions};
use proptest::prelude::*;

fn text() -> impl Strategy<Value = String> {
    "[a-fA-F ]{0,12}"
}

fn item() -> impl Strategy<Value = Item> {
    (
        "[a-z0-9-]{1,8}",
        proptest::option::of(text()),
        proptest::option::of(text()),
        proptest::option::of(text()),
    )
        .prop_map(|(id, title, desc, category)| Item {
            title,
            desc,
            category,
            ..Item::new(id, "", "", "", "/tool")
        })
}

proptest! {
    #[test]
    fn prop_score_in_unit_range(pattern in "[a-f]{1,6}", haystack in "[a-f ]{0,20}") {
        let score = score_of(&pattern, &haystack).value();
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn prop_results_sorted_and_below_threshold(
        items in proptest::collection::vec(item(), 0..40),
        query in "[a-fA-F]{1,5}",
        threshold in 0.0f64..1.2,
    ) {
        let options = SearchOptions::default().with_threshold(threshold).with_include_score(true);
        let index = SearchIndex::build(items, options);
        let results = index.search(&query);

        let scores: Vec<Score> = results.iter().filter_map(|r| r.score).collect();
        prop_assert_eq!(scores.len(), results.len());
        prop_assert!(scores.iter().all(|s| s.value() < threshold));
        prop_assert!(scores.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn prop_ties_keep_catalog_order(
        items in proptest::collection::vec(item(), 0..40),
        query in "[a-f]{1,4}",
    ) {
        let index = SearchIndex::build(items, SearchOptions::default().with_include_score(true));
        let results = index.search(&query);

        for pair in results.windows(2) {
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].ref_index < pair[1].ref_index);
            }
        }
    }

    #[test]
    fn prop_ref_index_points_at_item(
        items in proptest::collection::vec(item(), 0..40),
        query in "[a-f]{1,4}",
    ) {
        let index = SearchIndex::build(items.clone(), SearchOptions::default());
        for result in index.search(&query) {
            prop_assert_eq!(&items[result.ref_index], result.item);
        }
    }

    #[test]
    fn prop_search_is_deterministic(
        items in proptest::collection::vec(item(), 0..40),
        query in "[a-f]{0,4}",
    ) {
        let index = SearchIndex::build(items, SearchOptions::default().with_include_score(true));
        prop_assert_eq!(index.search(&query), index.search(&query));
    }

    #[test]
    fn prop_score_matches_reference_scan(pattern in "[a-f]{1,6}", haystack in "[a-f]{0,20}") {
        let expected = if haystack.contains(&pattern) {
            0.1
        } else {
            let p: Vec<char> = pattern.chars().collect();
            let mut j = 0;
            for c in haystack.chars() {
                if j < p.len() && c == p[j] {
                    j += 1;
                }
            }
            if j == 0 { 1.0 } else { 1.0 - j as f64 / p.len() as f64 }
        };
        prop_assert_eq!(score_of(&pattern, &haystack).value(), expected);
    }
}
