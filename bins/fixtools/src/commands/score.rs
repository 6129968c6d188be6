//! Score command - show how a pattern scores against a text

use crate::Format;
use anyhow::Result;
use fixtools_cli::output::format_score;
use fixtools_search::{greedy_match_count, score_of};
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ScoreBreakdown {
    score: f64,
    substring: bool,
    matched: usize,
    pattern_len: usize,
}

fn breakdown(pattern: &str, text: &str) -> ScoreBreakdown {
    let pattern = pattern.to_lowercase();
    let text = text.to_lowercase();
    let score = score_of(&pattern, &text);

    ScoreBreakdown {
        score: score.value(),
        substring: text.contains(&pattern),
        matched: greedy_match_count(&pattern, &text),
        pattern_len: pattern.chars().count(),
    }
}

/// Run score command
pub fn run(pattern: &str, text: &str, format: Format) -> Result<()> {
    let result = breakdown(pattern, text);

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        Format::Text => {
            let how = if result.substring {
                "substring".to_string()
            } else {
                format!("{}/{} characters in order", result.matched, result.pattern_len)
            };
            println!("{} {}", format_score(result.score).bold(), format!("({})", how).dimmed());
        }
    }

    Ok(())
}
