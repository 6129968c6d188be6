//! Core utilities for Fixtools tooling
//!
//! This crate provides shared functionality used by the command-line tools:
//!
//! - **Error handling**: Errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with defaults
//!
//! # Example
//!
//! ```rust,no_run
//! use fixtools_core::config::Config;
//!
//! let config = Config::load(None).expect("Invalid configuration");
//! println!("Catalog: {}", config.catalog_path().expect("Bad catalog path").display());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
#[allow(missing_docs)]
pub mod error;

pub use error::{exit_codes, Error, ErrorCode, Result, ResultExt};
