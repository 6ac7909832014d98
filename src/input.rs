//! Locale dictionaries registered with the resolver.

pub mod dictionary;
pub mod locale_set;
