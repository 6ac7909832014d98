//! Per-locale translators.

use std::fmt;
use std::sync::Arc;

use super::Registry;
use super::error::TranslateError;
use super::memo::Memo;
use crate::input::dictionary::Dictionary;
use crate::key_path::{
    self,
    KeyNotFoundError,
};
use crate::types::{
    Context,
    Leaf,
    LeafKind,
};

/// Resolves keys for one locale against its fallback-merged dictionary.
///
/// Obtained from [`Resolver::translator`](super::Resolver::translator); the same
/// locale always yields the same instance.
pub struct Translator {
    /// Locale this translator was requested for
    locale: String,
    /// Base dictionary with this locale's dictionary merged over it
    tree: Dictionary,
    /// Key separator from the resolver settings
    separator: String,
    /// Dotted key → resolved leaf
    resolved: Memo<Leaf>,
    /// Registry used for per-call locale overrides
    registry: Arc<Registry>,
}

impl Translator {
    pub(super) fn new(
        locale: impl Into<String>,
        tree: Dictionary,
        separator: impl Into<String>,
        registry: Arc<Registry>,
    ) -> Self {
        Self {
            locale: locale.into(),
            tree,
            separator: separator.into(),
            resolved: Memo::new(),
            registry,
        }
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The fallback-merged dictionary this translator reads from.
    #[must_use]
    pub const fn tree(&self) -> &Dictionary {
        &self.tree
    }

    /// Every dotted key this translator can resolve, in key order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.tree.leaves(&self.separator).into_iter().map(|(key, _)| key).collect()
    }

    /// Dotted keys whose leaf is of the given kind.
    #[must_use]
    pub fn keys_of_kind(&self, kind: LeafKind) -> Vec<String> {
        self.tree.keys_of_kind(kind, &self.separator)
    }

    /// Looks up the leaf for `key`, caching the result.
    ///
    /// # Errors
    /// - `key` does not lead to a leaf
    pub fn resolve(&self, key: &str) -> Result<Leaf, KeyNotFoundError> {
        self.resolved.get_or_try_insert_with(key, || {
            let leaf = key_path::resolve(&self.tree, key, &self.separator)?;
            tracing::debug!(
                locale = %self.locale,
                key,
                kind = %leaf.kind(),
                "Resolved translation key"
            );
            Ok(leaf.clone())
        })
    }

    /// Translates `key`. Templates are rendered with a `null` context.
    ///
    /// # Errors
    /// - `key` does not lead to a leaf
    pub fn translate(&self, key: &str) -> Result<String, TranslateError> {
        Ok(self.resolve(key)?.render(None))
    }

    /// Translates `key`, passing `context` to a template. Literals ignore it.
    ///
    /// # Errors
    /// - `key` does not lead to a leaf
    pub fn translate_with(&self, key: &str, context: &Context) -> Result<String, TranslateError> {
        Ok(self.resolve(key)?.render(Some(context)))
    }

    /// Translates `key` with the translator of `locale` instead of this one.
    ///
    /// The key is checked against this translator first. The context is only
    /// forwarded when the key leads to a template.
    ///
    /// # Errors
    /// - `key` does not lead to a leaf, here or in `locale`
    /// - `locale` is unknown and `strictLocales` is enabled
    pub fn translate_in(
        &self,
        key: &str,
        context: Option<&Context>,
        locale: &str,
    ) -> Result<String, TranslateError> {
        let leaf = self.resolve(key)?;
        let context = match leaf.kind() {
            LeafKind::Template => context,
            LeafKind::Literal => None,
        };

        let target = self.registry.translator(locale)?;
        tracing::trace!(from = %self.locale, to = locale, key, "Delegating translation");

        Ok(target.resolve(key)?.render(context))
    }

    /// Number of keys resolved so far.
    #[must_use]
    pub fn cached_keys(&self) -> usize {
        self.resolved.len()
    }
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("locale", &self.locale)
            .field("separator", &self.separator)
            .field("cached_keys", &self.resolved.len())
            .finish_non_exhaustive()
    }
}
