use thiserror::Error;

use crate::config::ConfigError;
use crate::key_path::KeyNotFoundError;
use crate::schema::SchemaMismatchError;

/// Errors that prevent a locale set from being registered
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// The base locale has no dictionary
    #[error("Base locale '{0}' is not present in the locale set")]
    UnknownLocale(String),
    /// A locale's dictionary does not have the shape of the base locale's
    #[error(transparent)]
    SchemaMismatch(#[from] SchemaMismatchError),
    /// Invalid resolver settings
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised by a single translation call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error(transparent)]
    KeyNotFound(#[from] KeyNotFoundError),
    /// Requested locale has no dictionary while `strictLocales` is enabled
    #[error("Locale '{0}' is not present in the locale set")]
    UnknownLocale(String),
}
