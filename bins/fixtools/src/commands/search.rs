//! Search command - rank catalog tools for a query

use crate::{context, CatalogArgs, Format};
use anyhow::Result;
use fixtools_cli::output::{format_count, format_duration, format_score, truncate, Status};
use fixtools_core::config::Config;
use fixtools_search::{Item, SearchOptions, SearchResult};
use fixtools_telemetry::{metrics, names, Timer};
use owo_colors::OwoColorize;

/// Command-line values that override the configuration
#[derive(Debug, Default)]
pub struct Overrides {
    pub limit: Option<usize>,
    pub threshold: Option<f64>,
    pub keys: Option<Vec<String>>,
    pub min_length: Option<usize>,
    pub scores: bool,
}

impl Overrides {
    /// Configured search options with the overrides applied
    pub fn apply(&self, base: &SearchOptions, show_scores: bool) -> SearchOptions {
        let mut options = base.clone();
        if let Some(threshold) = self.threshold {
            options = options.with_threshold(threshold);
        }
        if let Some(keys) = &self.keys {
            options = options.with_keys(keys.iter().map(|k| k.trim()).filter(|k| !k.is_empty()));
        }
        if let Some(len) = self.min_length {
            options = options.with_min_match_char_length(len);
        }
        if self.scores || show_scores {
            options = options.with_include_score(true);
        }
        options
    }
}

/// Run search command
pub fn run(
    config: &Config,
    catalog: &CatalogArgs,
    query: &str,
    overrides: Overrides,
    format: Format,
) -> Result<()> {
    let output = &config.schema.output;
    let options = overrides.apply(&config.schema.search, output.show_scores);
    let limit = overrides.limit.unwrap_or(output.limit);

    let index = context::build_index(config, catalog, options)?;

    let timer = Timer::start(names::SEARCH_LATENCY_MS);
    let mut results = index.search(query);
    let elapsed = timer.stop();

    metrics().increment(names::SEARCH_QUERIES);
    if results.is_empty() {
        metrics().increment(names::SEARCH_EMPTY_RESULTS);
    }

    let total = results.len();
    if limit > 0 {
        results.truncate(limit);
    }

    tracing::debug!(query, total, shown = results.len(), "Search finished");

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        Format::Text => print_results(query, &results, total, elapsed),
    }

    Ok(())
}

fn print_results(query: &str, results: &[SearchResult<&Item>], total: usize, elapsed: std::time::Duration) {
    if results.is_empty() {
        Status::warning(&format!("No tools match '{}'", query));
        return;
    }

    for (rank, result) in results.iter().enumerate() {
        let item = result.item;
        let title = item.title.as_deref().unwrap_or(&item.id);
        let link = item.link.as_deref().unwrap_or("");
        let category = item.category.as_deref().unwrap_or("-");

        print!("{:>3}. {}  {}  {}", rank + 1, title.bold(), link.cyan(), format!("[{}]", category).dimmed());
        if let Some(score) = result.score {
            print!("  {}", format_score(score.value()).yellow());
        }
        println!();

        if let Some(desc) = item.desc.as_deref().filter(|d| !d.is_empty()) {
            println!("     {}", truncate(desc, 72).dimmed());
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "{} of {} in {}",
            format_count(results.len(), "result", "results"),
            total,
            format_duration(elapsed)
        )
        .dimmed()
    );
}
