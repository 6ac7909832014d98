//! Nested translation dictionaries for a single locale.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde_json::Value;
use thiserror::Error;

use crate::key_path;
use crate::types::{
    Context,
    Leaf,
    LeafKind,
    Template,
};

/// Errors raised while converting JSON into a [`Dictionary`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// The JSON root is not an object
    #[error("Expected a JSON object at the dictionary root, found {found}")]
    NotAnObject { found: &'static str },
    /// A value that cannot become a leaf or a nested dictionary
    #[error("Unsupported {found} value at '{path}': only objects, strings, numbers and booleans are allowed")]
    UnsupportedValue { path: String, found: &'static str },
}

/// Entry of a [`Dictionary`]: either a leaf or a nested dictionary.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf(Leaf),
    Branch(Dictionary),
}

impl Node {
    #[must_use]
    pub const fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Branch(_) => None,
        }
    }

    #[must_use]
    pub const fn as_branch(&self) -> Option<&Dictionary> {
        match self {
            Self::Leaf(_) => None,
            Self::Branch(dictionary) => Some(dictionary),
        }
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<Dictionary> for Node {
    fn from(dictionary: Dictionary) -> Self {
        Self::Branch(dictionary)
    }
}

/// Arbitrarily nested mapping from keys to leaves or further dictionaries.
///
/// Keys are kept ordered so every walk over a dictionary is deterministic.
///
/// # Examples
/// ```
/// use locale_resolver::input::dictionary::Dictionary;
///
/// let en = Dictionary::new()
///     .literal("one", "one")
///     .template("hello", |ctx| format!("Hello {}", ctx.as_str().unwrap_or_default()))
///     .branch("contact", Dictionary::new().literal("email", "E-mail"));
///
/// assert_eq!(en.len(), 3);
/// assert!(en.get("contact").is_some_and(|node| node.as_branch().is_some()));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    /// Entries at this nesting level
    entries: BTreeMap<String, Node>,
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a literal string leaf.
    #[must_use]
    pub fn literal(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        let text: String = text.into();
        self.insert(key, Leaf::from(text));
        self
    }

    /// Adds a templated leaf.
    #[must_use]
    pub fn template(
        mut self,
        key: impl Into<String>,
        render: impl Fn(&Context) -> String + Send + Sync + 'static,
    ) -> Self {
        self.insert(key, Leaf::Template(Template::new(render)));
        self
    }

    /// Adds a nested dictionary.
    #[must_use]
    pub fn branch(mut self, key: impl Into<String>, dictionary: Self) -> Self {
        self.insert(key, dictionary);
        self
    }

    /// Inserts an entry, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, node: impl Into<Node>) -> Option<Node> {
        self.entries.insert(key.into(), node.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Node> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds a dictionary from a JSON object.
    ///
    /// Strings become literals, numbers and booleans become literals of their JSON
    /// rendering, and objects become nested dictionaries.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use locale_resolver::input::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::from_json(&json!({
    ///     "contact": { "email": "E-mail" },
    ///     "count": 3
    /// }))
    /// .unwrap();
    ///
    /// let leaves = dictionary.leaves(".");
    /// assert_eq!(leaves.len(), 2);
    /// assert_eq!(leaves[0].0, "contact.email");
    /// ```
    ///
    /// # Errors
    /// - The root is not an object
    /// - A `null` or array value is found anywhere in the tree
    pub fn from_json(json: &Value) -> Result<Self, DictionaryError> {
        from_json_value(json, None)
    }

    /// Flattens the dictionary into `(dotted key, leaf)` pairs in key order.
    #[must_use]
    pub fn leaves(&self, separator: &str) -> Vec<(String, &Leaf)> {
        let mut result = Vec::new();
        collect_leaves(self, separator, None, &mut result);
        result
    }

    /// Dotted keys whose leaf is of the given kind.
    #[must_use]
    pub fn keys_of_kind(&self, kind: LeafKind, separator: &str) -> Vec<String> {
        self.leaves(separator)
            .into_iter()
            .filter(|(_, leaf)| leaf.kind() == kind)
            .map(|(key, _)| key)
            .collect()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = (&'a String, &'a Node);
    type IntoIter = btree_map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, N: Into<Node>> FromIterator<(K, N)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, N)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().map(|(key, node)| (key.into(), node.into())).collect() }
    }
}

/// Converts the object found at `prefix`.
fn from_json_value(json: &Value, prefix: Option<&str>) -> Result<Dictionary, DictionaryError> {
    let Value::Object(map) = json else {
        return Err(DictionaryError::NotAnObject { found: json_type_name(json) });
    };

    let mut dictionary = Dictionary::new();
    for (key, value) in map {
        let full_key = key_path::join(prefix, key, ".");
        let node = match value {
            Value::Object(_) => Node::Branch(from_json_value(value, Some(&full_key))?),
            Value::String(s) => Node::Leaf(Leaf::from(s.as_str())),
            Value::Number(_) | Value::Bool(_) => Node::Leaf(Leaf::from(value.to_string())),
            Value::Null | Value::Array(_) => {
                return Err(DictionaryError::UnsupportedValue {
                    path: full_key,
                    found: json_type_name(value),
                });
            }
        };
        dictionary.insert(key.clone(), node);
    }
    Ok(dictionary)
}

fn collect_leaves<'a>(
    dictionary: &'a Dictionary,
    separator: &str,
    prefix: Option<&str>,
    result: &mut Vec<(String, &'a Leaf)>,
) {
    for (key, node) in dictionary {
        let full_key = key_path::join(prefix, key, separator);
        match node {
            Node::Leaf(leaf) => result.push((full_key, leaf)),
            Node::Branch(nested) => collect_leaves(nested, separator, Some(&full_key), result),
        }
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
