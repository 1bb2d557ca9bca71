//! Settings file loading

use std::path::Path;

use super::{
    ConfigError,
    I18nSettings,
    parse_directive,
};

/// Load settings from a file
///
/// - `.json` extension: JSON of the form `{"dict_file": "..."}`
/// - Anything else: an `i18n { dict_file ... }` directive
///
/// # Arguments
/// * `path` - Path to the settings file
///
/// # Errors
/// - The file cannot be read
/// - JSON or directive parse failure
/// - Validation failure
pub fn load_from_path(path: &Path) -> Result<I18nSettings, ConfigError> {
    tracing::debug!("Loading configuration from: {:?}", path);

    let content = std::fs::read_to_string(path)?;
    let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let settings: I18nSettings =
        if is_json { serde_json::from_str(&content)? } else { parse_directive(&content)? };

    settings.validate().map_err(ConfigError::ValidationErrors)?;
    tracing::debug!("Loaded settings: {:?}", settings);

    Ok(settings)
}
