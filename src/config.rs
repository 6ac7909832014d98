//! Resolver settings.
/// Configuration types and settings
mod types;

pub use types::{
    ConfigError,
    ResolverSettings,
    ValidationError,
};
