//! fixtools: search and validate the Fixtools tool catalog.

use clap::{Parser, Subcommand, ValueEnum};
use fixtools_cli::output::Status;
use fixtools_core::config::Config;
use fixtools_core::exit_codes;
use fixtools_telemetry::TelemetryConfig;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod context;

use commands::{bench, check, score, search};

/// Fuzzy search over the Fixtools tool catalog
#[derive(Parser)]
#[command(name = "fixtools")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Configuration file (defaults to .fixtools.toml and friends)
    #[arg(long, global = true, env = "FIXTOOLS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Catalog selection shared by every catalog-reading command
#[derive(Debug, Clone, clap::Args)]
pub struct CatalogArgs {
    /// Path to the JSON tool catalog
    #[arg(short, long, env = "FIXTOOLS_CATALOG")]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog
    Search {
        /// Query text
        query: String,

        #[command(flatten)]
        catalog: CatalogArgs,

        /// Maximum results to show (0 for all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Exclusive score threshold (0 = exact, 1 = no match)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Comma-separated fields to search; dotted paths reach nested members
        #[arg(short, long, value_delimiter = ',')]
        keys: Option<Vec<String>>,

        /// Minimum query length before searching
        #[arg(long)]
        min_length: Option<usize>,

        /// Show scores
        #[arg(short, long)]
        scores: bool,
    },

    /// Validate the catalog
    Check {
        #[command(flatten)]
        catalog: CatalogArgs,
    },

    /// Score a pattern against a text
    Score {
        /// Pattern (the query)
        pattern: String,

        /// Text (a field value)
        text: String,
    },

    /// Measure search latency
    Bench {
        /// Queries to run
        #[arg(required = true)]
        queries: Vec<String>,

        #[command(flatten)]
        catalog: CatalogArgs,

        /// Times each query is run
        #[arg(short, long, default_value = "100")]
        iterations: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            report_error(&e, cli.format);
            return ExitCode::from(exit_codes::CONFIG_ERROR as u8);
        }
    };

    let telemetry = TelemetryConfig {
        log_level: if cli.verbose {
            "fixtools=debug,fixtools_search=debug,fixtools_core=debug".to_string()
        } else {
            config.schema.logging.level.clone()
        },
        json: config.schema.logging.json,
        ..TelemetryConfig::default()
    };
    if let Err(e) = fixtools_telemetry::init_with_config(telemetry) {
        Status::warning(&e.to_string());
    }

    let result = match cli.command {
        Commands::Search { query, catalog, limit, threshold, keys, min_length, scores } => {
            let overrides = search::Overrides { limit, threshold, keys, min_length, scores };
            search::run(&config, &catalog, &query, overrides, cli.format)
        }
        Commands::Check { catalog } => check::run(&config, &catalog, cli.format),
        Commands::Score { pattern, text } => score::run(&pattern, &text, cli.format),
        Commands::Bench { queries, catalog, iterations } => {
            bench::run(&config, &catalog, &queries, iterations, cli.format)
        }
    };

    tracing::debug!(metrics = %fixtools_telemetry::metrics().export_json(), "Session metrics");

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let error = match e.downcast::<fixtools_core::Error>() {
                Ok(error) => error,
                Err(other) => fixtools_core::Error::internal(format!("{:#}", other)),
            };
            report_error(&error, cli.format);
            ExitCode::from(error.exit_code() as u8)
        }
    }
}

/// Print a failure to stderr, as an error report in JSON mode.
fn report_error(error: &fixtools_core::Error, format: Format) {
    match format {
        Format::Json => match serde_json::to_string_pretty(&error.to_report()) {
            Ok(json) => eprintln!("{}", json),
            Err(_) => Status::error(&error.to_string()),
        },
        Format::Text => Status::error(&error.to_string()),
    }
}
