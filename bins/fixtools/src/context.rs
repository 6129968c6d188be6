//! Catalog and index setup shared by the commands.

use crate::CatalogArgs;
use fixtools_core::config::Config;
use fixtools_core::ResultExt;
use fixtools_search::{Catalog, Item, SearchIndex, SearchOptions};
use std::path::PathBuf;

/// Catalog path: `--catalog`/`FIXTOOLS_CATALOG` as given, else the configured
/// one with `~` and variables expanded.
pub fn catalog_path(config: &Config, args: &CatalogArgs) -> fixtools_core::Result<PathBuf> {
    match &args.catalog {
        Some(path) => Ok(path.clone()),
        None => config.catalog_path(),
    }
}

/// Load the catalog the command should work on.
pub fn load_catalog(config: &Config, args: &CatalogArgs) -> fixtools_core::Result<Catalog> {
    let path = catalog_path(config, args)?;
    Catalog::from_path(&path).context(format!("Loading catalog {}", path.display()))
}

/// Load the catalog and build an index over it.
pub fn build_index(
    config: &Config,
    args: &CatalogArgs,
    options: SearchOptions,
) -> fixtools_core::Result<SearchIndex<Item>> {
    let catalog = load_catalog(config, args)?;
    Ok(SearchIndex::build(catalog.into_items(), options))
}
