//! Error types for metadata extraction
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Extraction Error Enum ==
/// Unified error type for metadata extraction.
///
/// Absence is never an error: reading an unset metadata key or a
/// never-populated property container yields an empty result instead.
/// These variants only cover failures to obtain or parse raw annotation
/// data, and they abort the whole extraction for the target (no partial
/// container is returned).
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A source could not resolve the requested class
    #[error("Cannot resolve class: {0}")]
    UnknownClass(String),

    /// A docblock line introduces a tag that cannot be parsed
    #[error("Malformed annotation on {target}: `{line}`")]
    MalformedAnnotation {
        /// The class, property or method the docblock belongs to
        target: String,
        /// The offending docblock line, stripped of comment decoration
        line: String,
    },

    /// Implementation-specific failure of an extraction source
    #[error("Source failed for {class}: {reason}")]
    SourceFailure {
        /// The class the source was queried for
        class: String,
        /// Human-readable description of the fault
        reason: String,
    },
}

// == Result Type Alias ==
/// Convenience Result type for metadata extraction.
pub type Result<T> = std::result::Result<T, ExtractionError>;
