//! Classmeta - annotation metadata extraction
//!
//! Parses documentation annotations attached to classes, properties and
//! methods into ordered key-value containers, with per-property nested
//! containers, pluggable extraction sources and an optional cache layer
//! keyed by class name.
//!
//! # Example
//!
//! ```
//! use classmeta::{ClassHandle, Meta, PropertyHandle, Reflect, Visibility};
//!
//! let class = ClassHandle::new("MetaTest\\FooBar")
//!     .with_doc("/**\n * @foo\n * @bar Hello world\n */")
//!     .property(
//!         PropertyHandle::new("x", Visibility::Public)
//!             .with_doc("/** @var float */"),
//!     );
//!
//! let mut meta = Meta::extract(&Reflect::Class(class)).unwrap();
//! assert_eq!(meta.get("bar").unwrap(), "Hello world");
//! assert_eq!(meta.of_property("x").get("var").unwrap(), "float");
//! ```

pub mod cache;
pub mod context;
pub mod error;
pub mod factory;
pub mod meta;
pub mod reflect;
pub mod source;

pub use cache::{MemoryCache, MetaCache};
pub use context::MetaContext;
pub use error::{ExtractionError, Result};
pub use factory::{AnnotationFactory, MetaFactory};
pub use meta::{Meta, Value};
pub use reflect::{ClassHandle, MethodHandle, PropertyHandle, Reflect, Visibility};
pub use source::{MapSource, Source};
