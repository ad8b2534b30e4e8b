//! Metadata Container Module
//!
//! An insertion-ordered key-value store for annotation metadata, with
//! lazily created child containers per class property.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::factory::{AnnotationFactory, MetaFactory};
use crate::reflect::Reflect;

// == Meta ==
/// Metadata for a class, property or method.
///
/// Attributes keep their insertion order and are unique per key. Child
/// containers are owned by their parent (no back-references), created on
/// first access to a property name and stable for the parent's lifetime.
///
/// Cloning is deep for the property sub-tree: mutating a clone's child
/// never affects the original's child.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// Attribute key-value mapping, in insertion order
    attributes: IndexMap<String, Value>,
    /// Metadata of class properties, keyed by property name
    properties: IndexMap<String, Meta>,
}

impl Meta {
    // == Constructor ==
    /// Creates an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    // == Get ==
    /// Returns the value for a key, or `None` when the key was never set.
    ///
    /// An absent key is not an error; it reads as `None`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    // == Set ==
    /// Sets a single attribute, overwriting any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(key.into(), value.into());
    }

    // == Set All ==
    /// Merges a mapping into the attributes.
    ///
    /// Colliding keys are overwritten; keys not mentioned in the mapping
    /// are left untouched.
    pub fn set_all<I, K, V>(&mut self, values: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (key, value) in values {
            self.attributes.insert(key.into(), value.into());
        }
    }

    // == Of Property ==
    /// Returns the metadata container of a property, creating an empty one
    /// on first access.
    ///
    /// Creation is idempotent: the same name always yields the same
    /// container across calls on the same parent.
    pub fn of_property(&mut self, property: &str) -> &mut Meta {
        self.properties.entry(property.to_string()).or_default()
    }

    // == Of Properties ==
    /// Returns the metadata of all properties populated or accessed so far.
    pub fn of_properties(&self) -> &IndexMap<String, Meta> {
        &self.properties
    }

    /// Returns the metadata of a property without creating it.
    pub fn property(&self, property: &str) -> Option<&Meta> {
        self.properties.get(property)
    }

    // == Attributes ==
    /// Returns the full attribute mapping, in insertion order.
    pub fn attributes(&self) -> &IndexMap<String, Value> {
        &self.attributes
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns true if the container holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    // == Extract ==
    /// Creates metadata from a reflective handle using the built-in
    /// annotation factory.
    ///
    /// The factory is constructed at the call site; callers that need a
    /// configured factory (source, cache) hold one in a
    /// [`MetaContext`](crate::context::MetaContext) instead.
    pub fn extract(target: &Reflect) -> Result<Meta> {
        AnnotationFactory::new().create(target)
    }
}
