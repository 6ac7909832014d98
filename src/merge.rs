//! Fallback merging of locale dictionaries.

use crate::input::dictionary::{
    Dictionary,
    Node,
};

/// Deep-merges `overrides` over `base` into a new dictionary.
///
/// Keys present on one side only pass through. Keys present on both sides recurse
/// when both are nested dictionaries; otherwise the override wins, including when
/// it replaces a whole subtree with a leaf or a leaf with a subtree.
#[must_use]
pub fn merge(base: &Dictionary, overrides: &Dictionary) -> Dictionary {
    let mut merged = base.clone();

    for (key, value) in overrides {
        let node = match (base.get(key), value) {
            (Some(Node::Branch(base_nested)), Node::Branch(override_nested)) => {
                Node::Branch(merge(base_nested, override_nested))
            }
            _ => value.clone(),
        };
        merged.insert(key.clone(), node);
    }

    merged
}
