//! Structural conformity checks across locale dictionaries.
//!
//! Every locale must have exactly the keys of the base locale at every nesting
//! level, and the same leaf kind for every key.

use std::fmt;
use std::ops::ControlFlow;

use thiserror::Error;

use crate::input::dictionary::{
    Dictionary,
    Node,
};
use crate::input::locale_set::LocaleSet;
use crate::key_path;
use crate::types::LeafKind;

/// How a locale's dictionary deviates from the base locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchKind {
    /// Key exists in the base locale only
    MissingKey,
    /// Key does not exist in the base locale
    ExtraKey,
    LeafKindMismatch { expected: LeafKind, found: LeafKind },
    /// Base has a nested dictionary where the locale has a leaf
    ExpectedBranch { found: LeafKind },
    /// Base has a leaf where the locale has a nested dictionary
    ExpectedLeaf { expected: LeafKind },
}

impl fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKey => f.write_str("key is missing"),
            Self::ExtraKey => f.write_str("key is not defined by the base locale"),
            Self::LeafKindMismatch { expected, found } => {
                write!(f, "expected a {expected} leaf, found a {found} leaf")
            }
            Self::ExpectedBranch { found } => {
                write!(f, "expected a nested dictionary, found a {found} leaf")
            }
            Self::ExpectedLeaf { expected } => {
                write!(f, "expected a {expected} leaf, found a nested dictionary")
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Locale '{locale}' does not match the base locale at '{path}': {kind}")]
pub struct SchemaMismatchError {
    pub locale: String,
    /// Dotted path of the offending key
    pub path: String,
    pub kind: MismatchKind,
}

/// Checks every locale against the base locale, stopping at the first mismatch.
///
/// # Errors
/// - First structural mismatch found, in locale then key order
pub fn validate(locale_set: &LocaleSet, separator: &str) -> Result<(), SchemaMismatchError> {
    let mut first = None;
    walk_locale_set(locale_set, separator, &mut |mismatch| {
        first = Some(mismatch);
        ControlFlow::Break(())
    });
    first.map_or(Ok(()), Err)
}

/// Collects every mismatch of every locale against the base locale.
#[must_use]
pub fn find_mismatches(locale_set: &LocaleSet, separator: &str) -> Vec<SchemaMismatchError> {
    let mut mismatches = Vec::new();
    walk_locale_set(locale_set, separator, &mut |mismatch| {
        mismatches.push(mismatch);
        ControlFlow::Continue(())
    });
    mismatches
}

/// Base locale keys that contain `separator` and so cannot be reached by a key path.
#[must_use]
pub fn unaddressable_keys(base: &Dictionary, separator: &str) -> Vec<String> {
    let mut keys = Vec::new();
    collect_unaddressable(base, separator, None, &mut keys);
    keys
}

fn collect_unaddressable(
    dictionary: &Dictionary,
    separator: &str,
    prefix: Option<&str>,
    keys: &mut Vec<String>,
) {
    for (key, node) in dictionary {
        let full_key = key_path::join(prefix, key, separator);
        if key.contains(separator) {
            keys.push(full_key.clone());
        }
        if let Node::Branch(nested) = node {
            collect_unaddressable(nested, separator, Some(&full_key), keys);
        }
    }
}

/// Reports mismatches of every non-base locale until `report` breaks.
fn walk_locale_set<F>(locale_set: &LocaleSet, separator: &str, report: &mut F)
where
    F: FnMut(SchemaMismatchError) -> ControlFlow<()>,
{
    for (locale, dictionary) in locale_set.others() {
        let mut walker = Walker { locale, separator, report: &mut *report };
        if walker.compare(locale_set.base(), dictionary, None).is_break() {
            return;
        }
    }
}

/// Lockstep walk of one locale against the base locale.
struct Walker<'a, F> {
    /// Locale being checked
    locale: &'a str,
    /// Separator used to build reported paths
    separator: &'a str,
    /// Receives each mismatch
    report: &'a mut F,
}

impl<F> Walker<'_, F>
where
    F: FnMut(SchemaMismatchError) -> ControlFlow<()>,
{
    fn compare(
        &mut self,
        base: &Dictionary,
        other: &Dictionary,
        prefix: Option<&str>,
    ) -> ControlFlow<()> {
        for (key, base_node) in base {
            let path = key_path::join(prefix, key, self.separator);
            let Some(other_node) = other.get(key) else {
                self.mismatch(path, MismatchKind::MissingKey)?;
                continue;
            };

            match (base_node, other_node) {
                (Node::Leaf(expected), Node::Leaf(found)) if expected.kind() != found.kind() => {
                    self.mismatch(
                        path,
                        MismatchKind::LeafKindMismatch {
                            expected: expected.kind(),
                            found: found.kind(),
                        },
                    )?;
                }
                (Node::Leaf(_), Node::Leaf(_)) => {}
                (Node::Leaf(expected), Node::Branch(_)) => {
                    self.mismatch(path, MismatchKind::ExpectedLeaf { expected: expected.kind() })?;
                }
                (Node::Branch(_), Node::Leaf(found)) => {
                    self.mismatch(path, MismatchKind::ExpectedBranch { found: found.kind() })?;
                }
                (Node::Branch(base_nested), Node::Branch(other_nested)) => {
                    self.compare(base_nested, other_nested, Some(&path))?;
                }
            }
        }

        for key in other.keys().filter(|key| !base.contains_key(key)) {
            let path = key_path::join(prefix, key, self.separator);
            self.mismatch(path, MismatchKind::ExtraKey)?;
        }

        ControlFlow::Continue(())
    }

    fn mismatch(&mut self, path: String, kind: MismatchKind) -> ControlFlow<()> {
        (self.report)(SchemaMismatchError { locale: self.locale.to_string(), path, kind })
    }
}
