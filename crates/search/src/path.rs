//! Dotted field paths and their resolution against catalog records.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// A configured search key such as `title` or `meta.tags`, split once into segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    raw: String,
    segments: Vec<String>,
}

impl FieldPath {
    /// Parse a dotted path. Empty segments are kept and simply never resolve.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let segments = raw.split('.').map(String::from).collect();
        Self { raw, segments }
    }

    /// The path as configured.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Path segments, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The first segment and the segments after it.
    pub fn head_tail(&self) -> (&str, &[String]) {
        (&self.segments[0], &self.segments[1..])
    }
}

impl From<&str> for FieldPath {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for FieldPath {
    fn from(raw: String) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for FieldPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::parse)
    }
}

/// A record whose string fields can be looked up by [`FieldPath`].
pub trait Document {
    /// Resolve `path` to a string value, or `None` when any segment is
    /// missing, an intermediate is not an object, or the leaf is not a string.
    fn resolve(&self, path: &FieldPath) -> Option<&str>;
}

impl Document for Value {
    fn resolve(&self, path: &FieldPath) -> Option<&str> {
        resolve_segments(self, path.segments())
    }
}

impl Document for Map<String, Value> {
    fn resolve(&self, path: &FieldPath) -> Option<&str> {
        let (head, tail) = path.head_tail();
        resolve_segments(self.get(head)?, tail)
    }
}

impl<D: Document + ?Sized> Document for &D {
    fn resolve(&self, path: &FieldPath) -> Option<&str> {
        (**self).resolve(path)
    }
}

/// Walk `segments` down from `value` through nested objects.
pub fn resolve_segments<'a>(value: &'a Value, segments: &[String]) -> Option<&'a str> {
    let mut current = value;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    current.as_str()
}
