//! Cache Module
//!
//! Stores fully built metadata trees keyed by class name, so a factory can
//! skip re-parsing annotations.

mod memory;

// Re-export public types
pub use memory::MemoryCache;

use crate::meta::Meta;

// == Meta Cache Trait ==
/// A cache of metadata containers keyed by an opaque string, typically a
/// fully-qualified class name.
///
/// Purely a capability contract: no eviction, expiry or capacity semantics.
/// Consumers wiring a cache into a factory own the invalidation policy. A
/// miss is not an error; it simply triggers the extraction path.
pub trait MetaCache {
    /// Stores metadata under a key, overwriting any previous entry.
    fn set(&self, key: &str, meta: Meta);

    /// Retrieves metadata by key, or `None` on a miss.
    fn get(&self, key: &str) -> Option<Meta>;

    /// Checks whether a key is present.
    fn has(&self, key: &str) -> bool;
}
