//! dict-i18n
//!
//! Dictionary-backed translation for template engines: JSON dictionaries keyed by
//! translation key and language, English fallback, `{N}` placeholders and nested
//! `i18n:` keys.

pub mod config;
pub mod dictionary;
pub mod extension;
pub mod resolver;
pub mod server;

mod test_utils;

pub use extension::I18n;
pub use resolver::Resolver;
