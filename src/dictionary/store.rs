//! Dictionary store
//!
//! The dictionary is built once at provisioning time and read by every
//! translation afterwards.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use parking_lot::{
    RwLock,
    RwLockReadGuard,
};

use super::LoadError;

/// Language code → localized text (e.g. `"de"` → `"Hallo"`).
pub type LocaleMap = HashMap<String, String>;

/// Translation key → [`LocaleMap`].
pub type Dictionary = HashMap<String, LocaleMap>;

/// Owns a [`Dictionary`] and serializes access to it.
///
/// Any number of readers may hold the dictionary at once. [`DictionaryStore::replace`]
/// takes the write side: it waits for in-flight readers to finish and blocks new
/// readers until the swap is complete.
#[derive(Debug, Default)]
pub struct DictionaryStore {
    /// Guarded dictionary
    inner: RwLock<Dictionary>,
}

impl DictionaryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that owns `dictionary`
    #[must_use]
    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        Self { inner: RwLock::new(dictionary) }
    }

    /// Load a store from a JSON dictionary file.
    ///
    /// See [`load_dictionary`] for the accepted format.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        load_dictionary(path).map(Self::with_dictionary)
    }

    /// Build a store from an in-memory JSON document
    pub fn from_json_str(text: &str) -> Result<Self, LoadError> {
        parse_dictionary(text).map(Self::with_dictionary)
    }

    /// Locale map for `key`, or `None` when the key is absent
    #[must_use]
    pub fn get(&self, key: &str) -> Option<LocaleMap> {
        self.inner.read().get(key).cloned()
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.read().contains_key(key)
    }

    /// Number of translation keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Shared read access to the whole dictionary.
    ///
    /// Holding the guard keeps the dictionary stable; a concurrent
    /// [`replace`](Self::replace) waits until it is dropped.
    pub fn read(&self) -> RwLockReadGuard<'_, Dictionary> {
        self.inner.read()
    }

    /// Swap in a new dictionary under the write lock and return the old one
    pub fn replace(&self, dictionary: Dictionary) -> Dictionary {
        let mut guard = self.inner.write();
        std::mem::replace(&mut *guard, dictionary)
    }
}

/// Read and parse a JSON dictionary file.
///
/// # Errors
/// - [`LoadError::NotFound`]: `path` does not exist
/// - [`LoadError::Read`]: any other I/O failure (permissions, directories)
/// - [`LoadError::Parse`]: the content is not UTF-8 JSON shaped as an object of objects of
///   strings, including a blank file
pub fn load_dictionary(path: &Path) -> Result<Dictionary, LoadError> {
    tracing::debug!(dict_file = %path.display(), "Loading dictionary");

    let content = std::fs::read(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            LoadError::NotFound { path: path.to_path_buf() }
        } else {
            LoadError::Read { path: path.to_path_buf(), source }
        }
    })?;

    Ok(serde_json::from_slice(&content)?)
}

/// Parse a JSON dictionary document.
///
/// An empty dictionary is written `{}`; blank text is a parse error.
///
/// # Examples
/// ```
/// use dict_i18n::dictionary::parse_dictionary;
///
/// let dictionary = parse_dictionary(r#"{"hello": {"de": "Hallo", "en": "Hello"}}"#).unwrap();
/// assert_eq!(dictionary["hello"]["de"], "Hallo");
/// ```
pub fn parse_dictionary(text: &str) -> Result<Dictionary, LoadError> {
    Ok(serde_json::from_str(text)?)
}
