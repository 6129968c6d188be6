//! Configuration schema definitions

use fixtools_search::{SearchOptions, DEFAULT_RESULT_LIMIT};
use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// Index options
    #[serde(default)]
    pub search: SearchOptions,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the tool catalog lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the JSON catalog; `~` and `$VARS` are expanded
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

fn default_catalog_path() -> String {
    "data/tools.json".to_string()
}

/// Result rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Results shown per query; 0 shows all
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Print scores next to results
    #[serde(default)]
    pub show_scores: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            show_scores: false,
        }
    }
}

fn default_limit() -> usize {
    DEFAULT_RESULT_LIMIT
}

/// Log output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
