//! Reflective Handle Module
//!
//! Plain-data descriptions of classes, properties and methods, sufficient
//! to inspect their names, declaring class, visibility and attached
//! documentation. The factory dispatches over the [`Reflect`] variant by
//! pattern matching.
//!
//! Fully-qualified names use `\` as the namespace separator
//! (`MetaTest\FooBar`), the convention of the documentation annotations
//! being modeled.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// == Namespace Separator ==
/// Separator between namespace segments in fully-qualified names.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Returns the namespace part of a fully-qualified name, or `""` for the
/// global namespace.
pub fn namespace_of(fqn: &str) -> &str {
    match fqn.rfind(NAMESPACE_SEPARATOR) {
        Some(pos) => &fqn[..pos],
        None => "",
    }
}

// == Visibility ==
/// Declared visibility of a class property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

impl Visibility {
    /// Returns the visibility as the lowercase keyword used in metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }
}

// == Class Handle ==
/// Reflective description of a class: fully-qualified name, attached
/// documentation, declared use-aliases and declared properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassHandle {
    /// Fully-qualified class name
    pub name: String,
    /// Raw attached documentation text
    pub doc: String,
    /// Use-aliases declared in the class's file, alias to fully-qualified
    /// name
    pub uses: IndexMap<String, String>,
    /// Declared properties, own and inherited as reflected
    pub properties: Vec<PropertyHandle>,
}

impl ClassHandle {
    /// Creates a handle for a fully-qualified class name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the attached documentation text.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    /// Declares a use-alias for type resolution.
    pub fn with_use(mut self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        self.uses.insert(alias.into(), target.into());
        self
    }

    /// Attaches a declared property, stamping it with this class's name
    /// and use-aliases.
    pub fn property(mut self, mut property: PropertyHandle) -> Self {
        property.declaring_class = self.name.clone();
        property.uses = self.uses.clone();
        self.properties.push(property);
        self
    }
}

// == Property Handle ==
/// Reflective description of a class property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyHandle {
    /// Simple property name
    pub name: String,
    /// Fully-qualified name of the declaring class
    pub declaring_class: String,
    /// Raw attached documentation text
    pub doc: String,
    /// Declared visibility
    pub visibility: Visibility,
    /// Whether the property is static
    pub is_static: bool,
    /// Declared type token, if the declaration carries one
    pub type_token: Option<String>,
    /// Use-aliases of the declaring class's file
    pub uses: IndexMap<String, String>,
}

impl PropertyHandle {
    /// Creates a handle for a property with the given visibility.
    ///
    /// The declaring class is stamped by [`ClassHandle::property`], or set
    /// explicitly via [`with_declaring_class`](Self::with_declaring_class)
    /// for standalone extraction.
    pub fn new(name: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            declaring_class: String::new(),
            doc: String::new(),
            visibility,
            is_static: false,
            type_token: None,
            uses: IndexMap::new(),
        }
    }

    /// Sets the attached documentation text.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    /// Sets the fully-qualified name of the declaring class.
    pub fn with_declaring_class(mut self, class: impl Into<String>) -> Self {
        self.declaring_class = class.into();
        self
    }

    /// Sets the declared type token.
    pub fn with_type(mut self, token: impl Into<String>) -> Self {
        self.type_token = Some(token.into());
        self
    }

    /// Marks the property as static.
    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Declares a use-alias for type resolution.
    pub fn with_use(mut self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        self.uses.insert(alias.into(), target.into());
        self
    }
}

// == Method Handle ==
/// Reflective description of a class method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodHandle {
    /// Simple method name
    pub name: String,
    /// Fully-qualified name of the declaring class
    pub declaring_class: String,
    /// Raw attached documentation text
    pub doc: String,
    /// Whether the method is static
    pub is_static: bool,
    /// Use-aliases of the declaring class's file
    pub uses: IndexMap<String, String>,
}

impl MethodHandle {
    /// Creates a handle for a method of the given class.
    pub fn new(name: impl Into<String>, declaring_class: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declaring_class: declaring_class.into(),
            doc: String::new(),
            is_static: false,
            uses: IndexMap::new(),
        }
    }

    /// Sets the attached documentation text.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    /// Marks the method as static.
    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Declares a use-alias for type resolution.
    pub fn with_use(mut self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        self.uses.insert(alias.into(), target.into());
        self
    }
}

// == Reflect ==
/// A reflective handle: a class, a property or a method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Reflect {
    /// A class with its declared properties
    Class(ClassHandle),
    /// A single property
    Property(PropertyHandle),
    /// A single method
    Method(MethodHandle),
}

impl Reflect {
    /// Returns the target's simple name (for a class, the name without its
    /// namespace).
    pub fn name(&self) -> &str {
        match self {
            Reflect::Class(class) => class
                .name
                .rsplit(NAMESPACE_SEPARATOR)
                .next()
                .unwrap_or(&class.name),
            Reflect::Property(property) => &property.name,
            Reflect::Method(method) => &method.name,
        }
    }

    /// Returns the fully-qualified name of the declaring class (for a
    /// class, its own name).
    pub fn declaring_class(&self) -> &str {
        match self {
            Reflect::Class(class) => &class.name,
            Reflect::Property(property) => &property.declaring_class,
            Reflect::Method(method) => &method.declaring_class,
        }
    }

    /// Returns the raw attached documentation text.
    pub fn doc(&self) -> &str {
        match self {
            Reflect::Class(class) => &class.doc,
            Reflect::Property(property) => &property.doc,
            Reflect::Method(method) => &method.doc,
        }
    }
}
