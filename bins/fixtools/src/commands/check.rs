//! Check command - validate the tool catalog

use crate::{context, CatalogArgs, Format};
use anyhow::Result;
use fixtools_cli::output::{format_count, Status};
use fixtools_core::config::Config;
use fixtools_search::CatalogIssue;
use serde::Serialize;

/// JSON output for check
#[derive(Debug, Serialize)]
struct JsonCheckOutput<'a> {
    path: String,
    items: usize,
    categories: Vec<&'a str>,
    issues: &'a [CatalogIssue],
}

/// Run check command
pub fn run(config: &Config, catalog_args: &CatalogArgs, format: Format) -> Result<()> {
    let path = context::catalog_path(config, catalog_args)?;
    let catalog = context::load_catalog(config, catalog_args)?;
    let issues = catalog.validate();

    match format {
        Format::Json => {
            let output = JsonCheckOutput {
                path: path.display().to_string(),
                items: catalog.len(),
                categories: catalog.categories(),
                issues: &issues,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Format::Text => {
            Status::header(&format!("Catalog {}", path.display()));
            Status::info(&format!(
                "{} in {}",
                format_count(catalog.len(), "tool", "tools"),
                format_count(catalog.categories().len(), "category", "categories"),
            ));
            for issue in &issues {
                Status::warning(&issue.to_string());
            }
        }
    }

    if issues.is_empty() {
        if format == Format::Text {
            Status::success("Catalog is valid");
        }
        Ok(())
    } else {
        Err(fixtools_core::Error::validation(format!(
            "Catalog has {}",
            format_count(issues.len(), "issue", "issues")
        ))
        .into())
    }
}
