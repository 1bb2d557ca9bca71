//! i18n template extension
//!
//! Owns the settings and the dictionary, and exposes `i18nTranslate` to a host's
//! template function registry.
//!
//! Dictionary format:
//!
//! ```json
//! {
//!   "hello": { "de": "Hallo", "en": "Hello" },
//!   "error.invalidAmount": { "de": "Ungültiger Betrag: {0}", "en": "Invalid amount: {0}" }
//! }
//! ```
//!
//! Template usage:
//!
//! ```text
//! {{ i18nTranslate "hello" "de" }}
//! {{ i18nTranslate "error.invalidAmount" "en" "i18n:finance.account" }}
//! ```

/// Provisioning and call errors
mod error;
/// Host function registry
mod functions;

use std::sync::Arc;

pub use error::{
    CallError,
    ProvisionError,
};
pub use functions::{
    FunctionMap,
    TRANSLATE_FUNCTION,
    TemplateFunction,
};

use crate::config::{
    ConfigError,
    I18nSettings,
};
use crate::dictionary::{
    Dictionary,
    DictionaryStore,
    load_dictionary,
};
use crate::resolver::{
    Argument,
    Resolver,
};

/// The i18n template extension
#[derive(Debug, Clone, Default)]
pub struct I18n {
    /// Extension settings
    settings: I18nSettings,
    /// Resolver over the extension's dictionary
    resolver: Resolver,
}

impl I18n {
    /// Create an unprovisioned extension; its dictionary is empty until
    /// [`provision`](Self::provision) runs.
    #[must_use]
    pub fn new(settings: I18nSettings) -> Self {
        Self { settings, resolver: Resolver::new(Arc::new(DictionaryStore::new())) }
    }

    #[must_use]
    pub const fn settings(&self) -> &I18nSettings {
        &self.settings
    }

    #[must_use]
    pub const fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Load the dictionary named by `dict_file`.
    ///
    /// Without `dict_file` the dictionary is emptied. The new dictionary is swapped in under
    /// the store's write lock, so provisioning again acts as a reload.
    ///
    /// # Errors
    /// - Settings fail validation
    /// - The dictionary file is missing, unreadable or malformed
    pub fn provision(&mut self) -> Result<(), ProvisionError> {
        self.settings.validate().map_err(ConfigError::ValidationErrors)?;

        let dictionary = match &self.settings.dict_file {
            Some(path) => {
                let dictionary = load_dictionary(path)?;
                tracing::info!(
                    dict_file = %path.display(),
                    keys = dictionary.len(),
                    "i18n dictionary loaded successfully"
                );
                dictionary
            }
            None => Dictionary::new(),
        };

        self.resolver.store().replace(dictionary);
        Ok(())
    }

    /// See [`Resolver::translate`]
    #[must_use]
    pub fn translate(&self, key: &str, lang: &str, args: &[Argument]) -> String {
        self.resolver.translate(key, lang, args)
    }

    /// Functions to register with the host: currently just [`TRANSLATE_FUNCTION`].
    ///
    /// The functions share this extension's dictionary, so a later
    /// [`provision`](Self::provision) is visible through them.
    #[must_use]
    pub fn template_functions(&self) -> FunctionMap {
        functions::function_map(&self.resolver)
    }
}
