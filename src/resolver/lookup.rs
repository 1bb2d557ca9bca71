//! Key and language fallback

use crate::dictionary::Dictionary;

/// Language used when the requested one has no translation
pub const FALLBACK_LANGUAGE: &str = "en";

/// Which fallback rule produced a translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// Text stored for the requested language
    Exact(&'a str),
    /// Requested language missing, [`FALLBACK_LANGUAGE`] text used
    Fallback(&'a str),
    /// Key exists but has neither the requested language nor [`FALLBACK_LANGUAGE`]
    NoTranslation,
    /// Key is not in the dictionary
    KeyNotFound,
}

impl<'a> Lookup<'a> {
    /// Selected text, if any rule produced one
    #[must_use]
    pub const fn text(self) -> Option<&'a str> {
        match self {
            Self::Exact(text) | Self::Fallback(text) => Some(text),
            Self::NoTranslation | Self::KeyNotFound => None,
        }
    }
}

/// Look up `key` in `lang`, falling back to [`FALLBACK_LANGUAGE`].
///
/// Emits no diagnostics; callers decide what to report.
#[must_use]
pub fn lookup<'a>(dictionary: &'a Dictionary, key: &str, lang: &str) -> Lookup<'a> {
    let Some(entry) = dictionary.get(key) else {
        return Lookup::KeyNotFound;
    };

    if let Some(text) = entry.get(lang) {
        return Lookup::Exact(text);
    }

    entry.get(FALLBACK_LANGUAGE).map_or(Lookup::NoTranslation, |text| Lookup::Fallback(text))
}
