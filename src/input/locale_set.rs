//! Collection of per-locale dictionaries with a designated base locale.

use std::collections::BTreeMap;

use crate::input::dictionary::Dictionary;
use crate::resolver::error::RegistrationError;

/// Per-locale dictionaries plus the base locale every other locale falls back to.
///
/// The base locale is always present; [`LocaleSet::new`] refuses anything else.
#[derive(Debug, Clone)]
pub struct LocaleSet {
    /// Identifier of the fallback locale
    base_locale: String,
    /// Dictionary of the fallback locale
    base: Dictionary,
    /// Locale identifier → dictionary, base locale excluded
    others: BTreeMap<String, Dictionary>,
}

impl LocaleSet {
    /// Creates a locale set.
    ///
    /// If a locale appears more than once, its last dictionary is kept.
    ///
    /// # Errors
    /// - `base_locale` has no dictionary
    pub fn new<K: Into<String>>(
        dictionaries: impl IntoIterator<Item = (K, Dictionary)>,
        base_locale: impl Into<String>,
    ) -> Result<Self, RegistrationError> {
        let mut others = BTreeMap::new();
        for (locale, dictionary) in dictionaries {
            let locale: String = locale.into();
            if others.contains_key(&locale) {
                tracing::warn!(
                    %locale,
                    "Locale registered twice; the later dictionary replaces the earlier one"
                );
            }
            others.insert(locale, dictionary);
        }
        let base_locale = base_locale.into();

        let Some(base) = others.remove(&base_locale) else {
            return Err(RegistrationError::UnknownLocale(base_locale));
        };

        Ok(Self { base_locale, base, others })
    }

    #[must_use]
    pub fn base_locale(&self) -> &str {
        &self.base_locale
    }

    /// Dictionary of the base locale.
    #[must_use]
    pub const fn base(&self) -> &Dictionary {
        &self.base
    }

    #[must_use]
    pub fn get(&self, locale: &str) -> Option<&Dictionary> {
        if locale == self.base_locale { Some(&self.base) } else { self.others.get(locale) }
    }

    #[must_use]
    pub fn contains(&self, locale: &str) -> bool {
        locale == self.base_locale || self.others.contains_key(locale)
    }

    /// Registered locale identifiers, base locale first, the rest sorted.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.base_locale.as_str()).chain(self.others.keys().map(String::as_str))
    }

    /// Every locale other than the base, with its dictionary.
    pub fn others(&self) -> impl Iterator<Item = (&str, &Dictionary)> {
        self.others.iter().map(|(locale, dictionary)| (locale.as_str(), dictionary))
    }

    /// Number of registered locales, base included.
    #[must_use]
    pub fn locale_count(&self) -> usize {
        self.others.len() + 1
    }
}
