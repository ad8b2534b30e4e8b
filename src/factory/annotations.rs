//! Annotation Factory Module
//!
//! The built-in extraction strategy: parses docblock annotations,
//! normalizes well-known keys and recursively populates property
//! containers, optionally consulting a source for class-level records and
//! a cache for whole trees.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, trace};

use crate::cache::MetaCache;
use crate::error::Result;
use crate::factory::docblock::parse_docblock;
use crate::factory::types::TypeScope;
use crate::factory::MetaFactory;
use crate::meta::Meta;
use crate::reflect::{ClassHandle, MethodHandle, PropertyHandle, Reflect};
use crate::source::Source;

// == Annotation Factory ==
/// Builds metadata containers from docblock annotations.
///
/// With a [`Source`] wired, class-level records come from the source
/// instead of the class's own docblock; property and method records are
/// always parsed from their attached documentation, since a source is
/// one-level and class-only. With a [`MetaCache`] wired, class trees are
/// looked up before extraction and stored after, keyed by the
/// fully-qualified class name.
#[derive(Default)]
pub struct AnnotationFactory {
    /// Optional class-level record source
    source: Option<Box<dyn Source>>,
    /// Optional cache of whole class trees
    cache: Option<Box<dyn MetaCache>>,
}

impl AnnotationFactory {
    // == Constructor ==
    /// Creates a factory that parses attached documentation only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wires a source for class-level records.
    pub fn with_source(mut self, source: impl Source + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Wires a cache for extracted class trees.
    pub fn with_cache(mut self, cache: impl MetaCache + 'static) -> Self {
        self.cache = Some(Box::new(cache));
        self
    }

    // == Class Extraction ==
    /// Builds the metadata tree of a class: its own record plus one child
    /// container per declared property.
    fn create_for_class(&self, class: &ClassHandle) -> Result<Meta> {
        if let Some(cache) = &self.cache {
            if let Some(meta) = cache.get(&class.name) {
                trace!(class = %class.name, "metadata cache hit");
                return Ok(meta);
            }
        }

        let mut meta = Meta::new();
        meta.set_all(self.raw_for_class(class)?);

        for property in &class.properties {
            *meta.of_property(&property.name) = self.create_for_property(property)?;
        }

        if let Some(cache) = &self.cache {
            cache.set(&class.name, meta.clone());
            debug!(class = %class.name, "metadata cached");
        }

        Ok(meta)
    }

    /// Obtains the raw class-level record, from the wired source when
    /// present, else from the class's docblock.
    fn raw_for_class(&self, class: &ClassHandle) -> Result<IndexMap<String, Value>> {
        match &self.source {
            Some(source) => source.for_class(&class.name),
            None => parse_docblock(&class.name, &class.doc),
        }
    }

    // == Property Extraction ==
    /// Builds the metadata of one property, normalizing `var` and
    /// deriving `access` from the reflected visibility.
    fn create_for_property(&self, property: &PropertyHandle) -> Result<Meta> {
        let target = format!("{}::${}", property.declaring_class, property.name);

        let mut meta = Meta::new();
        meta.set_all(parse_docblock(&target, &property.doc)?);

        // The declared type only fills in for a missing var annotation
        if meta.get("var").is_none() {
            if let Some(token) = &property.type_token {
                meta.set("var", token.clone());
            }
        }

        let scope = TypeScope::of(&property.declaring_class, &property.uses);
        normalize_type_key(&mut meta, "var", scope);

        // Derived from reflection, overriding any annotation
        meta.set("access", property.visibility.as_str());

        Ok(meta)
    }

    // == Method Extraction ==
    /// Builds the metadata of one method, normalizing `return`.
    fn create_for_method(&self, method: &MethodHandle) -> Result<Meta> {
        let target = format!("{}::{}()", method.declaring_class, method.name);

        let mut meta = Meta::new();
        meta.set_all(parse_docblock(&target, &method.doc)?);

        let scope = TypeScope::of(&method.declaring_class, &method.uses);
        normalize_type_key(&mut meta, "return", scope);

        Ok(meta)
    }
}

impl MetaFactory for AnnotationFactory {
    fn create(&self, target: &Reflect) -> Result<Meta> {
        trace!(target = %target.declaring_class(), "extracting metadata");
        match target {
            Reflect::Class(class) => self.create_for_class(class),
            Reflect::Property(property) => self.create_for_property(property),
            Reflect::Method(method) => self.create_for_method(method),
        }
    }
}

// == Normalization ==
/// Qualifies the string value of a type-carrying key in place.
///
/// Only the first whitespace-separated token is kept; a trailing
/// description is dropped by normalization.
fn normalize_type_key(meta: &mut Meta, key: &str, scope: TypeScope<'_>) {
    let token = match meta.get(key) {
        Some(Value::String(raw)) => raw.split_whitespace().next().map(str::to_string),
        _ => None,
    };

    if let Some(token) = token {
        meta.set(key, scope.qualify(&token));
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::Visibility;
    use serde_json::json;

    fn property(doc: &str, visibility: Visibility) -> PropertyHandle {
        PropertyHandle::new("x", visibility)
            .with_declaring_class("MetaTest\\FooBar")
            .with_doc(doc)
    }

    #[test]
    fn test_access_derives_from_visibility() {
        let factory = AnnotationFactory::new();

        let meta = factory
            .create(&Reflect::Property(property("", Visibility::Protected)))
            .unwrap();
        assert_eq!(meta.get("access"), Some(&json!("protected")));
    }

    #[test]
    fn test_access_overrides_annotation() {
        let factory = AnnotationFactory::new();
        let handle = property("/** @access private */", Visibility::Public);

        let meta = factory.create(&Reflect::Property(handle)).unwrap();
        assert_eq!(meta.get("access"), Some(&json!("public")));
    }

    #[test]
    fn test_var_seeded_from_declared_type() {
        let factory = AnnotationFactory::new();
        let handle = property("", Visibility::Public).with_type("Ball");

        let meta = factory.create(&Reflect::Property(handle)).unwrap();
        assert_eq!(meta.get("var"), Some(&json!("MetaTest\\Ball")));
    }

    #[test]
    fn test_var_annotation_beats_declared_type() {
        let factory = AnnotationFactory::new();
        let handle = property("/** @var int */", Visibility::Public).with_type("Ball");

        let meta = factory.create(&Reflect::Property(handle)).unwrap();
        assert_eq!(meta.get("var"), Some(&json!("int")));
    }

    #[test]
    fn test_var_drops_trailing_description() {
        let factory = AnnotationFactory::new();
        let handle = property("/** @var Ball the toy */", Visibility::Public);

        let meta = factory.create(&Reflect::Property(handle)).unwrap();
        assert_eq!(meta.get("var"), Some(&json!("MetaTest\\Ball")));
    }

    #[test]
    fn test_method_return_is_qualified() {
        let factory = AnnotationFactory::new();
        let handle = MethodHandle::new("read", "MetaTest\\FooBar").with_doc("/** @return Book */");

        let meta = factory.create(&Reflect::Method(handle)).unwrap();
        assert_eq!(meta.get("return"), Some(&json!("MetaTest\\Book")));
    }

    #[test]
    fn test_method_scalar_return_unchanged() {
        let factory = AnnotationFactory::new();
        let handle = MethodHandle::new("count", "MetaTest\\FooBar").with_doc("/** @return int */");

        let meta = factory.create(&Reflect::Method(handle)).unwrap();
        assert_eq!(meta.get("return"), Some(&json!("int")));
    }
}
