//! WASM bindings for the site search modal.

use wasm_bindgen::prelude::*;

use crate::{Catalog, Item, SearchIndex, SearchOptions};

/// Search index handle for JavaScript.
///
/// Built once per catalog version; the modal calls `search` on every query
/// change.
#[wasm_bindgen]
pub struct WasmSearchIndex {
    inner: SearchIndex<Item>,
}

#[wasm_bindgen]
impl WasmSearchIndex {
    /// Build an index.
    ///
    /// # Arguments
    /// * `catalog_json` - JSON array of tools (`id`, `title`, `desc`, `category`, `link`)
    /// * `options_json` - JSON options object; empty string for defaults
    #[wasm_bindgen(constructor)]
    pub fn new(catalog_json: &str, options_json: &str) -> Result<WasmSearchIndex, JsValue> {
        let catalog = Catalog::from_json_str(catalog_json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let options = if options_json.trim().is_empty() {
            SearchOptions::default()
        } else {
            SearchOptions::from_json_str(options_json)
                .map_err(|e| JsValue::from_str(&e.to_string()))?
        };

        Ok(Self {
            inner: SearchIndex::build(catalog.into_items(), options),
        })
    }

    /// Search and return results as JSON.
    ///
    /// # Arguments
    /// * `query` - Search query
    /// * `max_results` - Maximum results to return (0 for all)
    ///
    /// # Returns
    /// JSON array of `{ item, score?, refIndex }`, best first
    pub fn search(&self, query: &str, max_results: usize) -> Result<String, JsValue> {
        let mut results = self.inner.search(query);
        if max_results > 0 {
            results.truncate(max_results);
        }

        serde_json::to_string(&results)
            .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
    }

    /// Number of indexed tools.
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.inner.len()
    }
}

/// Fuzzy score of `pattern` against `text`, both lowercased first.
///
/// # Returns
/// Score in `[0, 1]`, lower is better
#[wasm_bindgen]
pub fn fuzzy_score(pattern: &str, text: &str) -> f64 {
    crate::score_of(&pattern.to_lowercase(), &text.to_lowercase()).value()
}

/// Default number of results the modal renders.
#[wasm_bindgen]
pub fn default_result_limit() -> usize {
    crate::DEFAULT_RESULT_LIMIT
}
