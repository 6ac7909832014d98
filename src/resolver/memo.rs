//! Insert-once caches shared between threads.

use std::collections::HashMap;
use std::sync::{
    PoisonError,
    RwLock,
};

/// String-keyed cache whose entries are computed at most once and never evicted.
///
/// Lookups take the read lock. A miss takes the write lock and checks again before
/// computing, so concurrent first accesses to the same key run the computation once
/// and all observe the stored value. Failed computations are not stored.
#[derive(Debug)]
pub(crate) struct Memo<V> {
    /// Cached values
    entries: RwLock<HashMap<String, V>>,
}

impl<V> Default for Memo<V> {
    fn default() -> Self {
        Self { entries: RwLock::new(HashMap::new()) }
    }
}

impl<V: Clone> Memo<V> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the cached value for `key`, if any.
    pub(crate) fn get(&self, key: &str) -> Option<V> {
        // Entries are never mutated after insertion, so a poisoned lock still holds valid data.
        self.entries.read().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    /// Returns the cached value for `key`, computing and storing it on first access.
    pub(crate) fn get_or_try_insert_with<E>(
        &self,
        key: &str,
        init: impl FnOnce() -> Result<V, E>,
    ) -> Result<V, E> {
        if let Some(value) = self.get(key) {
            tracing::trace!(key, "Cache hit");
            return Ok(value);
        }

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(value) = entries.get(key) {
            return Ok(value.clone());
        }

        let value = init()?;
        entries.insert(key.to_string(), value.clone());
        Ok(value)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
