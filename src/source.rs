//! Extraction Source Module
//!
//! The boundary through which raw class-level metadata enters the system.
//! A source maps a fully-qualified class name to a flat key-value record;
//! property- and method-level detail is the factory's concern.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{ExtractionError, Result};

// == Source Trait ==
/// A capability producing raw metadata for a class.
///
/// Implementations may read structured documentation comments, external
/// metadata files, or any other authority; the core treats the record as
/// opaque. Fails with [`ExtractionError::UnknownClass`] when the class
/// cannot be resolved, or [`ExtractionError::SourceFailure`] for
/// implementation-specific faults.
pub trait Source {
    /// Obtains the raw metadata record for a fully-qualified class name.
    fn for_class(&self, class: &str) -> Result<IndexMap<String, Value>>;
}

// == Map Source ==
/// A source backed by an in-memory map of class records.
///
/// The simplest real source, also used as a test double: classes are
/// registered up front and anything else resolves to
/// [`ExtractionError::UnknownClass`].
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    /// Registered class records, keyed by fully-qualified class name
    classes: IndexMap<String, IndexMap<String, Value>>,
}

impl MapSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the record for a class, replacing any previous one.
    pub fn insert<I, K, V>(&mut self, class: impl Into<String>, record: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let record = record
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self.classes.insert(class.into(), record);
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_class<I, K, V>(mut self, class: impl Into<String>, record: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.insert(class, record);
        self
    }
}

impl Source for MapSource {
    fn for_class(&self, class: &str) -> Result<IndexMap<String, Value>> {
        self.classes
            .get(class)
            .cloned()
            .ok_or_else(|| ExtractionError::UnknownClass(class.to_string()))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_map_source_hit() {
        let source = MapSource::new()
            .with_class("MetaTest\\FooBar", [("foo", json!(true)), ("blue", json!("22"))]);

        let record = source.for_class("MetaTest\\FooBar").unwrap();
        assert_eq!(record.get("foo"), Some(&json!(true)));
        assert_eq!(record.get("blue"), Some(&json!("22")));
    }

    #[test]
    fn test_map_source_unknown_class() {
        let source = MapSource::new();

        let result = source.for_class("MetaTest\\Gone");
        assert!(matches!(result, Err(ExtractionError::UnknownClass(_))));
    }

    #[test]
    fn test_map_source_replaces_record() {
        let mut source = MapSource::new();
        source.insert("MetaTest\\FooBar", [("foo", json!(true))]);
        source.insert("MetaTest\\FooBar", [("bar", json!("Hello world"))]);

        let record = source.for_class("MetaTest\\FooBar").unwrap();
        assert_eq!(record.get("foo"), None);
        assert_eq!(record.get("bar"), Some(&json!("Hello world")));
    }
}
