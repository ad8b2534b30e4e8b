//! Type Resolution Module
//!
//! Qualifies raw type tokens from `var` and `return` annotations against
//! the declaring class's namespace and use-aliases, the same way a
//! language's own type-hint resolver would.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::reflect::{namespace_of, NAMESPACE_SEPARATOR};

// == Scalar Types ==
/// Type aliases that pass through qualification unchanged.
const SCALAR_TYPES: &[&str] = &[
    "array", "bool", "boolean", "callable", "double", "false", "float", "int", "integer",
    "iterable", "mixed", "null", "object", "parent", "resource", "self", "static", "string",
    "true", "void",
];

// == Patterns ==
/// Matches class-name-like tokens: identifier segments joined by the
/// namespace separator, with an optional leading separator.
static CLASS_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\\?[A-Za-z_][A-Za-z0-9_]*(\\[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("class name pattern is valid")
});

// == Type Scope ==
/// Resolution context of a declaring class: its namespace and the
/// use-aliases declared in its file.
#[derive(Debug, Clone, Copy)]
pub struct TypeScope<'a> {
    /// Namespace the declaring class lives in, `""` for global
    namespace: &'a str,
    /// Use-aliases, alias to fully-qualified name
    uses: &'a IndexMap<String, String>,
}

impl<'a> TypeScope<'a> {
    /// Creates the scope of a declaring class.
    pub fn of(declaring_class: &'a str, uses: &'a IndexMap<String, String>) -> Self {
        Self {
            namespace: namespace_of(declaring_class),
            uses,
        }
    }

    // == Qualify ==
    /// Resolves a raw type token into a fully-qualified name.
    ///
    /// Resolution order: scalar aliases pass unchanged; a token with a
    /// leading separator is explicitly qualified (the separator is
    /// stripped); a token containing a separator is taken as already
    /// qualified; a bare token is checked against the use-aliases before
    /// being prefixed with the current namespace. Tokens that are not
    /// class-name-like (unions, generics, `Foo[]`) are left as given.
    pub fn qualify(&self, token: &str) -> String {
        if token.is_empty() || is_scalar(token) || !CLASS_NAME_RE.is_match(token) {
            return token.to_string();
        }

        if let Some(explicit) = token.strip_prefix(NAMESPACE_SEPARATOR) {
            return explicit.to_string();
        }
        if token.contains(NAMESPACE_SEPARATOR) {
            return token.to_string();
        }

        if let Some(target) = self.uses.get(token) {
            return target.clone();
        }

        if self.namespace.is_empty() {
            token.to_string()
        } else {
            format!("{}{}{}", self.namespace, NAMESPACE_SEPARATOR, token)
        }
    }
}

/// Checks a token against the scalar alias list.
fn is_scalar(token: &str) -> bool {
    SCALAR_TYPES
        .iter()
        .any(|scalar| scalar.eq_ignore_ascii_case(token))
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_passes_unchanged() {
        let uses = IndexMap::new();
        let scope = TypeScope::of("MetaTest\\FooBar", &uses);

        assert_eq!(scope.qualify("int"), "int");
        assert_eq!(scope.qualify("float"), "float");
        assert_eq!(scope.qualify("string"), "string");
        assert_eq!(scope.qualify("bool"), "bool");
        assert_eq!(scope.qualify("Mixed"), "Mixed");
    }

    #[test]
    fn test_bare_token_gets_namespace() {
        let uses = IndexMap::new();
        let scope = TypeScope::of("MetaTest\\FooBar", &uses);

        assert_eq!(scope.qualify("Ball"), "MetaTest\\Ball");
    }

    #[test]
    fn test_alias_wins_over_namespace() {
        let mut uses = IndexMap::new();
        uses.insert("Ball".to_string(), "Toys\\Ball".to_string());
        let scope = TypeScope::of("MetaTest\\FooBar", &uses);

        assert_eq!(scope.qualify("Ball"), "Toys\\Ball");
        assert_eq!(scope.qualify("Bike"), "MetaTest\\Bike");
    }

    #[test]
    fn test_leading_separator_is_explicit() {
        let mut uses = IndexMap::new();
        uses.insert("Ball".to_string(), "Toys\\Ball".to_string());
        let scope = TypeScope::of("MetaTest\\FooBar", &uses);

        assert_eq!(scope.qualify("\\Ball"), "Ball");
        assert_eq!(scope.qualify("\\Other\\Ball"), "Other\\Ball");
    }

    #[test]
    fn test_qualified_token_is_kept() {
        let uses = IndexMap::new();
        let scope = TypeScope::of("MetaTest\\FooBar", &uses);

        assert_eq!(scope.qualify("MetaTest\\Bike"), "MetaTest\\Bike");
        assert_eq!(scope.qualify("Other\\Thing"), "Other\\Thing");
    }

    #[test]
    fn test_global_namespace_keeps_bare_token() {
        let uses = IndexMap::new();
        let scope = TypeScope::of("FooBar", &uses);

        assert_eq!(scope.qualify("Ball"), "Ball");
    }

    #[test]
    fn test_non_class_like_tokens_left_as_given() {
        let uses = IndexMap::new();
        let scope = TypeScope::of("MetaTest\\FooBar", &uses);

        assert_eq!(scope.qualify("Ball[]"), "Ball[]");
        assert_eq!(scope.qualify("float|null"), "float|null");
        assert_eq!(scope.qualify("array<string>"), "array<string>");
        assert_eq!(scope.qualify(""), "");
    }
}
