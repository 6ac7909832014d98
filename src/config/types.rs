use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "keySeparator")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolverSettings {
    /// Separator between segments of a translation key.
    pub key_separator: String,

    /// Reject translators for locales that have no dictionary.
    ///
    /// - `false`: such locales fall back entirely to the base locale (default)
    /// - `true`: requesting them fails with an unknown locale error
    pub strict_locales: bool,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self { key_separator: ".".to_string(), strict_locales: false }
    }
}

impl ResolverSettings {
    /// Parses settings from JSON and validates them.
    ///
    /// # Errors
    /// - JSON parse error
    /// - Validation error
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate().map_err(ConfigError::ValidationErrors)?;
        Ok(settings)
    }

    /// # Errors
    /// - Invalid separator
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
