//! Dotted key path utilities.

use std::fmt;

use thiserror::Error;

use crate::input::dictionary::{
    Dictionary,
    Node,
};
use crate::types::Leaf;

/// Why a key failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    /// No entry with this name at this level
    Missing,
    /// The path continues past a leaf
    TooDeep,
    /// The path ends on a nested dictionary
    NotALeaf,
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("no such entry"),
            Self::TooDeep => f.write_str("path continues past a leaf"),
            Self::NotALeaf => f.write_str("path ends on a nested dictionary"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Translation key '{key}' not found: {reason} at segment '{segment}'")]
pub struct KeyNotFoundError {
    pub key: String,
    /// First segment that does not resolve
    pub segment: String,
    pub reason: NotFoundReason,
}

impl KeyNotFoundError {
    #[must_use]
    pub fn new(key: impl Into<String>, segment: impl Into<String>, reason: NotFoundReason) -> Self {
        Self { key: key.into(), segment: segment.into(), reason }
    }
}

/// Joins `key` onto an optional `prefix`.
#[must_use]
pub fn join(prefix: Option<&str>, key: &str, separator: &str) -> String {
    prefix.map_or_else(|| key.to_string(), |p| format!("{p}{separator}{key}"))
}

/// Walks `tree` along `key` and returns the leaf at its end.
///
/// # Examples
/// ```
/// use locale_resolver::input::dictionary::Dictionary;
/// use locale_resolver::key_path::resolve;
///
/// let tree = Dictionary::new().branch(
///     "contact",
///     Dictionary::new().branch("address", Dictionary::new().literal("secondary", "X")),
/// );
///
/// let leaf = resolve(&tree, "contact.address.secondary", ".").unwrap();
/// assert_eq!(leaf.as_literal(), Some("X"));
/// assert!(resolve(&tree, "contact.missing", ".").is_err());
/// ```
///
/// # Errors
/// - A segment has no entry
/// - An intermediate segment is a leaf
/// - The last segment is a nested dictionary
pub fn resolve<'a>(
    tree: &'a Dictionary,
    key: &str,
    separator: &str,
) -> Result<&'a Leaf, KeyNotFoundError> {
    let mut current = tree;
    let mut segments = key.split(separator).peekable();

    while let Some(segment) = segments.next() {
        let Some(node) = current.get(segment) else {
            return Err(KeyNotFoundError::new(key, segment, NotFoundReason::Missing));
        };

        match (node, segments.peek()) {
            (Node::Leaf(leaf), None) => return Ok(leaf),
            (Node::Leaf(_), Some(next)) => {
                return Err(KeyNotFoundError::new(key, *next, NotFoundReason::TooDeep));
            }
            (Node::Branch(_), None) => {
                return Err(KeyNotFoundError::new(key, segment, NotFoundReason::NotALeaf));
            }
            (Node::Branch(nested), Some(_)) => current = nested,
        }
    }

    // `split` yields at least one segment, so the loop always returns.
    Err(KeyNotFoundError::new(key, key, NotFoundReason::Missing))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;
    use crate::test_utils::en;

    #[rstest]
    #[case("contact.address.secondary", "Secondary address")]
    #[case("contact.address.main", "Main address")]
    #[case("contact.email", "E-mail")]
    #[case("one", "one")]
    fn resolve_literal_paths(#[case] key: &str, #[case] expected: &str) {
        let tree = en();

        let leaf = resolve(&tree, key, ".").unwrap();

        assert_that!(leaf.as_literal(), some(eq(expected)));
    }

    #[rstest]
    #[case::missing_top_level("missing", "missing", NotFoundReason::Missing)]
    #[case::missing_nested("contact.missing", "missing", NotFoundReason::Missing)]
    #[case::too_deep("contact.email.extra", "extra", NotFoundReason::TooDeep)]
    #[case::too_deep_from_root("one.two", "two", NotFoundReason::TooDeep)]
    #[case::not_a_leaf("contact.address", "address", NotFoundReason::NotALeaf)]
    #[case::empty_key("", "", NotFoundReason::Missing)]
    #[case::trailing_separator("contact.", "", NotFoundReason::Missing)]
    fn resolve_failures(
        #[case] key: &str,
        #[case] segment: &str,
        #[case] reason: NotFoundReason,
    ) {
        let tree = en();

        let result = resolve(&tree, key, ".");

        assert_that!(result, err(eq(&KeyNotFoundError::new(key, segment, reason))));
    }

    #[rstest]
    fn resolve_with_custom_separator() {
        let tree = en();

        let leaf = resolve(&tree, "contact:address:main", ":").unwrap();
        assert_that!(leaf.as_literal(), some(eq("Main address")));

        let error = resolve(&tree, "contact.address.main", ":").unwrap_err();
        assert_that!(error.segment, eq("contact.address.main"));
        assert_that!(error.reason, eq(NotFoundReason::Missing));
    }

    #[rstest]
    fn key_not_found_error_message() {
        let error = KeyNotFoundError::new("contact.missing", "missing", NotFoundReason::Missing);

        assert_that!(
            error.to_string(),
            eq("Translation key 'contact.missing' not found: no such entry at segment 'missing'")
        );
    }

    #[rstest]
    #[case(None, "key", ".", "key")]
    #[case(Some("a"), "b", ".", "a.b")]
    #[case(Some("a.b"), "c", ":", "a.b:c")]
    fn join_cases(
        #[case] prefix: Option<&str>,
        #[case] key: &str,
        #[case] separator: &str,
        #[case] expected: &str,
    ) {
        assert_that!(join(prefix, key, separator), eq(expected));
    }
}
