//! locale-resolver
//!
//! Resolves translation keys against nested per-locale dictionaries, falling back
//! to a base locale for anything a locale does not define.

pub mod config;
pub mod input;
pub mod key_path;
pub mod merge;
pub mod resolver;
pub mod schema;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use resolver::error::{
    RegistrationError,
    TranslateError,
};
pub use resolver::translator::Translator;
pub use resolver::{
    Resolver,
    create_resolver,
};
