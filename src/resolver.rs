//! Locale set registration and translator lookup.

pub mod error;
mod memo;
pub mod translator;

use std::sync::Arc;
#[cfg(test)]
use std::sync::atomic::{
    AtomicUsize,
    Ordering,
};

use self::error::{
    RegistrationError,
    TranslateError,
};
use self::memo::Memo;
use self::translator::Translator;
use crate::config::{
    ConfigError,
    ResolverSettings,
};
use crate::input::dictionary::Dictionary;
use crate::input::locale_set::LocaleSet;
use crate::merge::merge;
use crate::schema;

/// Registers `dictionaries` with `base_locale` as the fallback, using default settings.
///
/// # Examples
/// ```
/// use locale_resolver::create_resolver;
/// use locale_resolver::input::dictionary::Dictionary;
/// use serde_json::json;
///
/// let en = Dictionary::new()
///     .template("hello", |ctx| format!("Hello {}", ctx.as_str().unwrap_or_default()))
///     .literal("bye", "Bye");
/// let ka = Dictionary::new()
///     .template("hello", |ctx| format!("გამარჯობა {}", ctx.as_str().unwrap_or_default()))
///     .literal("bye", "ნახვამდის");
///
/// let resolver = create_resolver([("en", en), ("ka", ka)], "en").unwrap();
/// let translator = resolver.translator("ka").unwrap();
///
/// assert_eq!(translator.translate("bye").unwrap(), "ნახვამდის");
/// let hello = translator.translate_in("hello", Some(&json!("john")), "en").unwrap();
/// assert_eq!(hello, "Hello john");
/// ```
///
/// # Errors
/// - `base_locale` has no dictionary
/// - A dictionary does not match the shape of the base locale's dictionary
pub fn create_resolver<K: Into<String>>(
    dictionaries: impl IntoIterator<Item = (K, Dictionary)>,
    base_locale: impl Into<String>,
) -> Result<Resolver, RegistrationError> {
    Resolver::new(dictionaries, base_locale)
}

/// Registered locale set and the process-wide translator cache.
#[derive(Debug)]
pub(crate) struct Registry {
    /// Validated dictionaries
    locale_set: LocaleSet,
    /// Validated settings
    settings: ResolverSettings,
    /// Locale → translator
    translators: Memo<Arc<Translator>>,
    /// Number of translators built so far
    #[cfg(test)]
    builds: AtomicUsize,
}

impl Registry {
    /// Returns the translator for `locale`, building it on first request.
    pub(crate) fn translator(
        self: &Arc<Self>,
        locale: &str,
    ) -> Result<Arc<Translator>, TranslateError> {
        self.translators
            .get_or_try_insert_with(locale, || self.build_translator(locale).map(Arc::new))
    }

    fn build_translator(self: &Arc<Self>, locale: &str) -> Result<Translator, TranslateError> {
        let own = self.locale_set.get(locale);
        if own.is_none() && self.settings.strict_locales {
            return Err(TranslateError::UnknownLocale(locale.to_string()));
        }

        #[cfg(test)]
        self.builds.fetch_add(1, Ordering::SeqCst);

        let empty = Dictionary::new();
        let tree = merge(self.locale_set.base(), own.unwrap_or(&empty));
        tracing::debug!(
            locale,
            base_locale = self.locale_set.base_locale(),
            has_own_dictionary = own.is_some(),
            "Built translator"
        );

        Ok(Translator::new(
            locale,
            tree,
            self.settings.key_separator.as_str(),
            Arc::clone(self),
        ))
    }
}

/// Entry point for translations: hands out one memoized [`Translator`] per locale.
///
/// Cloning is cheap and clones share the translator cache.
#[derive(Debug, Clone)]
pub struct Resolver {
    /// Shared state
    registry: Arc<Registry>,
}

impl Resolver {
    /// Registers `dictionaries` with default settings.
    ///
    /// # Errors
    /// - `base_locale` has no dictionary
    /// - A dictionary does not match the shape of the base locale's dictionary
    pub fn new<K: Into<String>>(
        dictionaries: impl IntoIterator<Item = (K, Dictionary)>,
        base_locale: impl Into<String>,
    ) -> Result<Self, RegistrationError> {
        Self::with_settings(dictionaries, base_locale, ResolverSettings::default())
    }

    /// Registers `dictionaries` with the given settings.
    ///
    /// Every dictionary is checked against the base locale's dictionary before
    /// anything is returned.
    ///
    /// # Errors
    /// - Invalid settings
    /// - `base_locale` has no dictionary
    /// - A dictionary does not match the shape of the base locale's dictionary
    pub fn with_settings<K: Into<String>>(
        dictionaries: impl IntoIterator<Item = (K, Dictionary)>,
        base_locale: impl Into<String>,
        settings: ResolverSettings,
    ) -> Result<Self, RegistrationError> {
        let result = register(dictionaries, base_locale.into(), settings);
        if let Err(error) = &result {
            tracing::warn!("Locale set rejected: {error}");
        }
        result
    }

    /// Returns the translator for `locale`.
    ///
    /// Repeated calls with the same locale return the same instance. A locale
    /// without a dictionary falls back entirely to the base locale unless
    /// `strictLocales` is enabled.
    ///
    /// # Errors
    /// - `locale` is unknown and `strictLocales` is enabled
    pub fn translator(&self, locale: &str) -> Result<Arc<Translator>, TranslateError> {
        self.registry.translator(locale)
    }

    #[must_use]
    pub fn base_locale(&self) -> &str {
        self.registry.locale_set.base_locale()
    }

    /// Registered locales, base locale first.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.registry.locale_set.locales()
    }

    #[must_use]
    pub fn settings(&self) -> &ResolverSettings {
        &self.registry.settings
    }
}

fn register<K: Into<String>>(
    dictionaries: impl IntoIterator<Item = (K, Dictionary)>,
    base_locale: String,
    settings: ResolverSettings,
) -> Result<Resolver, RegistrationError> {
    settings.validate().map_err(ConfigError::ValidationErrors)?;

    let locale_set = LocaleSet::new(dictionaries, base_locale)?;
    schema::validate(&locale_set, &settings.key_separator)?;

    for key in schema::unaddressable_keys(locale_set.base(), &settings.key_separator) {
        tracing::warn!(
            %key,
            separator = %settings.key_separator,
            "Translation key contains the key separator and cannot be resolved"
        );
    }

    tracing::debug!(
        base_locale = locale_set.base_locale(),
        locale_count = locale_set.locale_count(),
        "Registered locale set"
    );

    Ok(Resolver {
        registry: Arc::new(Registry {
            locale_set,
            settings,
            translators: Memo::new(),
            #[cfg(test)]
            builds: AtomicUsize::new(0),
        }),
    })
}
