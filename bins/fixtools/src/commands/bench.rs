//! Bench command - measure search latency over the catalog

use crate::{context, CatalogArgs, Format};
use anyhow::Result;
use fixtools_cli::output::{format_count, format_duration, Status};
use fixtools_cli::progress;
use fixtools_core::config::Config;
use fixtools_telemetry::{metrics, names, Timer};
use serde::Serialize;
use std::time::Instant;

#[derive(Debug, Serialize)]
struct JsonBenchOutput {
    items: usize,
    queries: usize,
    iterations: usize,
    total_ms: f64,
    latency_ms: fixtools_telemetry::HistogramStats,
}

/// Run bench command
pub fn run(
    config: &Config,
    catalog: &CatalogArgs,
    queries: &[String],
    iterations: usize,
    format: Format,
) -> Result<()> {
    if iterations == 0 {
        return Err(fixtools_core::Error::invalid_input("--iterations must be at least 1").into());
    }

    let loading = (format == Format::Text).then(|| progress::spinner("Building index..."));
    let index = context::build_index(config, catalog, config.schema.search.clone())?;
    if let Some(spinner) = loading {
        spinner.finish_and_clear();
    }
    let total_runs = (queries.len() * iterations) as u64;

    let pb = (format == Format::Text).then(|| progress::query_progress(total_runs));
    let started = Instant::now();

    for _ in 0..iterations {
        for query in queries {
            let timer = Timer::start(names::SEARCH_LATENCY_MS);
            let results = index.search(query);
            timer.stop();

            metrics().increment(names::SEARCH_QUERIES);
            if results.is_empty() {
                metrics().increment(names::SEARCH_EMPTY_RESULTS);
            }
            if let Some(pb) = &pb {
                pb.inc(1);
            }
        }
    }

    let elapsed = started.elapsed();
    let stats = metrics().histogram_stats(names::SEARCH_LATENCY_MS);

    match format {
        Format::Json => {
            let output = JsonBenchOutput {
                items: index.len(),
                queries: queries.len(),
                iterations,
                total_ms: elapsed.as_secs_f64() * 1000.0,
                latency_ms: stats,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Format::Text => {
            if let Some(pb) = &pb {
                progress::finish_success(pb, "Done");
            }
            Status::header("Search latency");
            Status::info(&format!(
                "{} over {} in {}",
                format_count(total_runs as usize, "search", "searches"),
                format_count(index.len(), "tool", "tools"),
                format_duration(elapsed)
            ));
            println!(
                "  min {:.3}ms  p50 {:.3}ms  p95 {:.3}ms  p99 {:.3}ms  max {:.3}ms",
                stats.min, stats.p50, stats.p95, stats.p99, stats.max
            );
        }
    }

    Ok(())
}
