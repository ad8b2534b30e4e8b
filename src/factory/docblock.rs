//! Docblock Parsing Module
//!
//! Parses `@tag` annotations out of documentation comment text into a
//! flat raw record. A bare tag reads as `true`, a tag with trailing text
//! reads as that text; prose lines are ignored.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::error::{ExtractionError, Result};

// == Patterns ==
/// Matches one annotation line: tag name plus optional value text.
static TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^@([A-Za-z_][A-Za-z0-9_-]*)(?:\s+(.*))?$").expect("tag pattern is valid")
});

// == Parse Docblock ==
/// Parses a docblock into the raw annotation record.
///
/// Accepts `/** ... */` blocks as well as bare text; comment decoration
/// (`/**`, leading `*`, `*/`) is stripped per line. Duplicate tags keep
/// the last value. Lines that start a tag but carry an unparseable name
/// fail with [`ExtractionError::MalformedAnnotation`], naming `target`.
///
/// # Arguments
/// * `target` - Name of the class, property or method the docblock
///   belongs to, used in error messages
/// * `doc` - Raw documentation text
pub fn parse_docblock(target: &str, doc: &str) -> Result<IndexMap<String, Value>> {
    let mut record = IndexMap::new();

    for line in doc.lines() {
        let line = strip_decoration(line);
        if !line.starts_with('@') {
            continue;
        }

        let captures = TAG_RE.captures(line).ok_or_else(|| {
            ExtractionError::MalformedAnnotation {
                target: target.to_string(),
                line: line.to_string(),
            }
        })?;

        let key = captures[1].to_string();
        let value = match captures.get(2).map(|m| m.as_str().trim()) {
            Some(text) if !text.is_empty() => Value::from(text),
            _ => Value::Bool(true),
        };
        record.insert(key, value);
    }

    Ok(record)
}

/// Strips comment decoration from one docblock line.
fn strip_decoration(line: &str) -> &str {
    let mut line = line.trim();
    if let Some(rest) = line.strip_prefix("/**") {
        line = rest;
    } else if let Some(rest) = line.strip_prefix('*') {
        line = rest;
    }
    if let Some(rest) = line.strip_suffix("*/") {
        line = rest;
    }
    line.trim()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_bare_tag_is_true() {
        let record = parse_docblock("T", "/**\n * @required\n */").unwrap();
        assert_eq!(record.get("required"), Some(&json!(true)));
    }

    #[test]
    fn test_parse_tag_with_value() {
        let doc = "/**\n * @foo\n * @bar Hello world\n * @blue 22\n */";
        let record = parse_docblock("T", doc).unwrap();

        assert_eq!(record.get("foo"), Some(&json!(true)));
        assert_eq!(record.get("bar"), Some(&json!("Hello world")));
        assert_eq!(record.get("blue"), Some(&json!("22")));
    }

    #[test]
    fn test_parse_ignores_prose() {
        let doc = "/**\n * The foo bar class.\n *\n * @foo\n */";
        let record = parse_docblock("T", doc).unwrap();

        assert_eq!(record.len(), 1);
        assert_eq!(record.get("foo"), Some(&json!(true)));
    }

    #[test]
    fn test_parse_inline_docblock() {
        let record = parse_docblock("T", "/** @var int */").unwrap();
        assert_eq!(record.get("var"), Some(&json!("int")));
    }

    #[test]
    fn test_parse_keeps_tag_order() {
        let doc = "/**\n * @foo\n * @bar Hello world\n * @blue 22\n */";
        let record = parse_docblock("T", doc).unwrap();

        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["foo", "bar", "blue"]);
    }

    #[test]
    fn test_parse_duplicate_tag_keeps_last() {
        let doc = "/**\n * @var int\n * @var float\n */";
        let record = parse_docblock("T", doc).unwrap();
        assert_eq!(record.get("var"), Some(&json!("float")));
    }

    #[test]
    fn test_parse_empty_doc() {
        assert!(parse_docblock("T", "").unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed_tag_fails() {
        let result = parse_docblock("MetaTest\\FooBar", "/** @ 1bad */");
        match result {
            Err(ExtractionError::MalformedAnnotation { target, line }) => {
                assert_eq!(target, "MetaTest\\FooBar");
                assert_eq!(line, "@ 1bad");
            }
            other => panic!("Expected MalformedAnnotation, got {:?}", other),
        }
    }
}
