//! Benchmarks for catalog search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fixtools_search::{score_of, Item, SearchIndex, SearchOptions};

const WORDS: [&str; 8] = ["json", "formatter", "minifier", "base64", "seo", "meta", "csv", "converter"];

fn create_catalog(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| {
            let title = format!("{} {}", WORDS[i % WORDS.len()], WORDS[(i / 3) % WORDS.len()]);
            let desc = format!("Free online {} tool number {}", WORDS[(i / 7) % WORDS.len()], i);
            Item::new(format!("tool-{}", i), title, desc, WORDS[i % 4], format!("/tools/{}", i))
        })
        .collect()
}

fn bench_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_of");

    group.bench_function("substring", |b| {
        b.iter(|| score_of(black_box("format"), black_box("json formatter and validator")))
    });

    group.bench_function("subsequence", |b| {
        b.iter(|| score_of(black_box("jsfmt"), black_box("json formatter and validator")))
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [100, 500, 1000, 5000].iter() {
        let index = SearchIndex::build(create_catalog(*size), SearchOptions::default());

        group.bench_with_input(BenchmarkId::new("query", size), size, |b, _| {
            b.iter(|| index.search(black_box("jsn frm")))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_score, bench_search);
criterion_main!(benches);
