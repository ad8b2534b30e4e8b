//! Meta Module
//!
//! Provides the ordered metadata container with nested per-property
//! containers.

mod container;


// Re-export public types
pub use container::Meta;

/// Attribute value type: string, boolean, integer or nested structure.
pub use serde_json::Value;
