//! Context Module
//!
//! A caller-owned configuration object holding the active extraction
//! factory. Replaces process-wide factory state with explicit dependency
//! injection: construct one, optionally swap the factory, and pass the
//! context to whoever extracts metadata.

use crate::error::Result;
use crate::factory::{AnnotationFactory, MetaFactory};
use crate::meta::Meta;
use crate::reflect::Reflect;

// == Meta Context ==
/// Holds the active [`MetaFactory`].
///
/// Not internally synchronized: callers that share a context across
/// threads while replacing the factory provide their own synchronization,
/// typically by configuring the context before concurrent use begins.
pub struct MetaContext {
    /// The active extraction factory
    factory: Box<dyn MetaFactory>,
}

impl MetaContext {
    // == Constructor ==
    /// Creates a context around the built-in annotation factory.
    pub fn new() -> Self {
        Self {
            factory: Box::new(AnnotationFactory::new()),
        }
    }

    /// Creates a context around a custom factory.
    pub fn with_factory(factory: impl MetaFactory + 'static) -> Self {
        Self {
            factory: Box::new(factory),
        }
    }

    // == Factory Access ==
    /// Returns the currently active factory.
    pub fn factory(&self) -> &dyn MetaFactory {
        self.factory.as_ref()
    }

    /// Replaces the active factory.
    ///
    /// Not retroactive: affects subsequent `extract` calls only, never
    /// containers already built.
    pub fn use_factory(&mut self, factory: impl MetaFactory + 'static) {
        self.factory = Box::new(factory);
    }

    // == Extract ==
    /// Creates metadata for a reflective handle using the active factory.
    pub fn extract(&self, target: &Reflect) -> Result<Meta> {
        self.factory.create(target)
    }
}

impl Default for MetaContext {
    fn default() -> Self {
        Self::new()
    }
}
