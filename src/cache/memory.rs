//! Memory Cache Module
//!
//! A plain in-memory implementation of the cache contract.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use tracing::trace;

use crate::cache::MetaCache;
use crate::meta::Meta;

// == Memory Cache ==
/// In-memory metadata cache backed by a mutex-guarded map.
///
/// Entries live until overwritten or the cache is dropped; there is no
/// eviction or expiry. `get` hands out a clone, so holders never share
/// mutable state with the cache.
#[derive(Debug, Default)]
pub struct MemoryCache {
    /// Stored metadata trees, keyed by class name
    entries: Mutex<HashMap<String, Meta>>,
}

impl MemoryCache {
    // == Constructor ==
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Meta>> {
        // A poisoned lock only means a panic elsewhere; the map itself is
        // still consistent for these single-step operations.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MetaCache for MemoryCache {
    fn set(&self, key: &str, meta: Meta) {
        trace!(key, "storing metadata in memory cache");
        self.lock().insert(key.to_string(), meta);
    }

    fn get(&self, key: &str) -> Option<Meta> {
        self.lock().get(key).cloned()
    }

    fn has(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }
}
