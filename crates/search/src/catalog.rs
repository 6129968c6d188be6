//! Tool catalog loading and validation.
//!
//! The catalog is the flat array of tool descriptors the site assembles from
//! its category files. This module only reads it and reports data problems;
//! how it is generated is not its concern.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, SearchError};
use crate::path::{resolve_segments, Document, FieldPath};

/// One searchable tool.
///
/// Deserialization never fails on a JSON object: a known field holding a
/// non-string value is left unset and kept in `extra`, and a numeric id is
/// stringified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Item {
    /// Unique, stable identifier
    pub id: String,
    /// Short display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Longer description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    /// Grouping label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Relative destination path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Any other members, reachable through dotted paths
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Map<String, Value>> for Item {
    fn from(mut members: Map<String, Value>) -> Self {
        let id = match members.remove("id") {
            Some(Value::String(id)) => id,
            Some(Value::Number(n)) => n.to_string(),
            Some(other) => {
                members.insert("id".to_string(), other);
                String::new()
            }
            None => String::new(),
        };
        let title = take_string(&mut members, "title");
        let desc = take_string(&mut members, "desc");
        let category = take_string(&mut members, "category");
        let link = take_string(&mut members, "link");

        Self { id, title, desc, category, link, extra: members }
    }
}

/// Removes `key` when it holds a string; anything else stays in `members`.
fn take_string(members: &mut Map<String, Value>, key: &str) -> Option<String> {
    match members.remove(key)? {
        Value::String(value) => Some(value),
        other => {
            members.insert(key.to_string(), other);
            None
        }
    }
}

impl Item {
    /// Creates an item with the four descriptive fields set.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        desc: impl Into<String>,
        category: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
            desc: Some(desc.into()),
            category: Some(category.into()),
            link: Some(link.into()),
            extra: Map::new(),
        }
    }

    /// Adds an extra member.
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

impl Document for Item {
    fn resolve(&self, path: &FieldPath) -> Option<&str> {
        let (head, tail) = path.head_tail();
        let known = match head {
            "id" => Some(self.id.as_str()),
            "title" => self.title.as_deref(),
            "desc" => self.desc.as_deref(),
            "category" => self.category.as_deref(),
            "link" => self.link.as_deref(),
            _ => return resolve_segments(self.extra.get(head)?, tail),
        };
        // Known fields are strings, so nothing nests below them.
        if tail.is_empty() { known } else { None }
    }
}

/// A data-quality problem found in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogIssue {
    /// Two or more items share an id
    DuplicateId { id: String, indices: Vec<usize> },
    /// Item has an empty id
    EmptyId { index: usize },
    /// Item has no title to display
    MissingTitle { index: usize, id: String },
    /// Link is not a site-relative path
    InvalidLink { index: usize, id: String, link: String },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::DuplicateId { id, indices } => {
                write!(f, "duplicate id '{}' at positions {:?}", id, indices)
            }
            CatalogIssue::EmptyId { index } => write!(f, "empty id at position {}", index),
            CatalogIssue::MissingTitle { index, id } => {
                write!(f, "'{}' (position {}) has no title", id, index)
            }
            CatalogIssue::InvalidLink { index, id, link } => {
                write!(f, "'{}' (position {}) links to '{}', expected a relative path", id, index, link)
            }
        }
    }
}

/// The full list of tools, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Wraps already-loaded items.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Parse a catalog from a JSON array of tool objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Build a catalog from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Array(entries) = value else {
            return Err(SearchError::InvalidCatalog(format!(
                "expected a JSON array of tools, found {}",
                json_kind(&value)
            )));
        };

        let items = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| match entry {
                Value::Object(members) => Ok(Item::from(members)),
                other => Err(SearchError::InvalidCatalog(format!(
                    "entry {} is {}, expected an object",
                    index,
                    json_kind(&other)
                ))),
            })
            .collect::<Result<Vec<Item>>>()?;

        Ok(Self { items })
    }

    /// Read and parse a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SearchError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), items = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Hands the items over, e.g. to [`crate::SearchIndex::build`].
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for category in self.items.iter().filter_map(|i| i.category.as_deref()) {
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }

    /// Report data problems without rejecting the catalog.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        let mut positions: HashMap<&str, Vec<usize>> = HashMap::new();

        for (index, item) in self.items.iter().enumerate() {
            if item.id.is_empty() {
                issues.push(CatalogIssue::EmptyId { index });
            } else {
                positions.entry(item.id.as_str()).or_default().push(index);
            }

            if item.title.as_deref().map_or(true, |t| t.trim().is_empty()) {
                issues.push(CatalogIssue::MissingTitle { index, id: item.id.clone() });
            }

            if let Some(link) = &item.link {
                if !is_relative_link(link) {
                    issues.push(CatalogIssue::InvalidLink {
                        index,
                        id: item.id.clone(),
                        link: link.clone(),
                    });
                }
            }
        }

        let mut duplicates: Vec<CatalogIssue> = positions
            .into_iter()
            .filter(|(_, indices)| indices.len() > 1)
            .map(|(id, indices)| CatalogIssue::DuplicateId { id: id.to_string(), indices })
            .collect();
        duplicates.sort_by(|a, b| match (a, b) {
            (
                CatalogIssue::DuplicateId { indices: a, .. },
                CatalogIssue::DuplicateId { indices: b, .. },
            ) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        });
        issues.extend(duplicates);

        issues
    }
}

impl From<Vec<Item>> for Catalog {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

fn is_relative_link(link: &str) -> bool {
    link.starts_with('/') && !link.starts_with("//") && !link.contains("://")
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
