use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use super::DirectiveError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// Name of the offending setting (e.g., "dict_file")
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

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Failed to parse i18n directive: {0}")]
    Directive(#[from] DirectiveError),
}

/// One numbered line per error
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Settings of the i18n template extension.
///
/// JSON form: `{"dict_file": "/etc/translations.json"}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct I18nSettings {
    /// Path to the JSON translations dictionary.
    /// Structure: translation key → language code → text.
    /// When unset, the dictionary is empty and every key falls back to itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dict_file: Option<PathBuf>,
}

impl I18nSettings {
    /// # Errors
    /// - `dict_file` is set but empty
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Some(path) = &self.dict_file
            && path.as_os_str().is_empty()
        {
            errors.push(ValidationError::new(
                "dict_file",
                "The path cannot be empty. Please specify a file (e.g., \"/etc/translations.json\"), or remove this field",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
