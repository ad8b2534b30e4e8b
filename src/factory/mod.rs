//! Factory Module
//!
//! Turns reflective handles into populated metadata containers. The
//! [`MetaFactory`] trait is the extraction-strategy seam; the built-in
//! [`AnnotationFactory`] parses docblock annotations, normalizes
//! well-known keys and recurses into declared properties.

mod annotations;
mod docblock;
mod types;

// Re-export public types
pub use annotations::AnnotationFactory;
pub use docblock::parse_docblock;
pub use types::TypeScope;

use crate::error::Result;
use crate::meta::Meta;
use crate::reflect::Reflect;

// == Meta Factory Trait ==
/// Strategy for building metadata from a reflective handle.
///
/// A failing target fails the whole `create` call atomically; no partial
/// container is ever returned.
pub trait MetaFactory {
    /// Produces a populated metadata container for the target.
    fn create(&self, target: &Reflect) -> Result<Meta>;
}
