//! Translation entry point

use std::sync::Arc;

use super::Argument;
use super::interpolate::interpolate;
use super::lookup::{
    Lookup,
    lookup,
};
use crate::dictionary::DictionaryStore;

/// Resolves translation keys against a shared [`DictionaryStore`]
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    /// Dictionary shared with the owning extension
    store: Arc<DictionaryStore>,
}

impl Resolver {
    #[must_use]
    pub const fn new(store: Arc<DictionaryStore>) -> Self {
        Self { store }
    }

    #[must_use]
    pub const fn store(&self) -> &Arc<DictionaryStore> {
        &self.store
    }

    /// Translate `key` into `lang` and substitute `args` into its placeholders.
    ///
    /// Never fails:
    /// - Unknown key: returns `key` and logs a warning
    /// - Missing language: uses `en` and logs at info level
    /// - Neither language nor `en`: returns `key` and logs a warning
    ///
    /// The dictionary stays read-locked for the whole call, so the text and any nested
    /// key arguments come from the same snapshot.
    #[must_use]
    pub fn translate(&self, key: &str, lang: &str, args: &[Argument]) -> String {
        let dictionary = self.store.read();

        let text = match lookup(&dictionary, key, lang) {
            Lookup::Exact(text) => text,
            Lookup::Fallback(text) => {
                tracing::info!(
                    key,
                    requested_lang = lang,
                    "requested language not found, falling back to 'en'"
                );
                text
            }
            Lookup::NoTranslation => {
                tracing::warn!(
                    key,
                    requested_lang = lang,
                    "no translation for requested language or 'en', using key as fallback"
                );
                return key.to_string();
            }
            Lookup::KeyNotFound => {
                tracing::warn!(key, "translation key not found, using key as fallback");
                return key.to_string();
            }
        };

        if args.is_empty() {
            return text.to_string();
        }

        interpolate(text, args, &dictionary, lang)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;
    use crate::test_utils::capture_logs;

    #[fixture]
    fn resolver() -> Resolver {
        let store = DictionaryStore::from_json_str(
            r#"{
                "hello": {"de": "Hallo", "en": "Hello"},
                "welcome": {"de": "Willkommen", "en": "Welcome"},
                "goodbye": {"en": "Goodbye"},
                "only.german": {"de": "Nur Deutsch"},
                "account": {"en": "Account", "de": "Konto"},
                "system": {"en": "System"},
                "error.invalidAmount": {"en": "Invalid amount: {0}", "de": "Ungültiger Betrag: {0}"},
                "error.generic": {"en": "Error: {0} with code {1} for user {2}"},
                "price": {"en": "Price: {0} EUR"},
                "value": {"en": "Value: {0} and {5}"},
                "greeting": {"en": "Hi {0}, see {1}"}
            }"#,
        )
        .unwrap();
        Resolver::new(Arc::new(store))
    }

    #[rstest]
    #[case::exact_de("hello", "de", "Hallo")]
    #[case::exact_en("hello", "en", "Hello")]
    #[case::exact_other_key("welcome", "de", "Willkommen")]
    #[case::fallback_to_en("hello", "fr", "Hello")]
    #[case::fallback_only_en("goodbye", "de", "Goodbye")]
    #[case::no_translation("only.german", "fr", "only.german")]
    #[case::missing_key("missing.key", "en", "missing.key")]
    #[case::empty_key("", "en", "")]
    fn test_translate_without_args(
        resolver: Resolver,
        #[case] key: &str,
        #[case] lang: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(resolver.translate(key, lang, &[]), expected);
    }

    #[rstest]
    #[case::english("en", "Invalid amount: Account")]
    #[case::german("de", "Ungültiger Betrag: Konto")]
    fn test_translate_nested_argument(
        resolver: Resolver,
        #[case] lang: &str,
        #[case] expected: &str,
    ) {
        let args = [Argument::from("i18n:account")];

        assert_eq!(resolver.translate("error.invalidAmount", lang, &args), expected);
    }

    #[rstest]
    fn test_translate_mixed_arguments(resolver: Resolver) {
        let args = [Argument::from("i18n:system"), Argument::from(500), Argument::from("alice")];

        assert_eq!(
            resolver.translate("error.generic", "en", &args),
            "Error: System with code 500 for user alice"
        );
    }

    #[rstest]
    fn test_translate_numeric_argument(resolver: Resolver) {
        assert_eq!(resolver.translate("price", "en", &[Argument::from(19.99)]), "Price: 19.99 EUR");
    }

    #[rstest]
    fn test_translate_out_of_range_placeholder(resolver: Resolver) {
        assert_eq!(
            resolver.translate("value", "en", &[Argument::from("hello")]),
            "Value: hello and {5}"
        );
    }

    #[rstest]
    fn test_translate_extra_arguments_are_ignored(resolver: Resolver) {
        let args = [Argument::from("a"), Argument::from("b")];

        assert_eq!(resolver.translate("hello", "de", &args), "Hallo");
    }

    #[rstest]
    fn test_translate_missing_key_ignores_arguments(resolver: Resolver) {
        let args = [Argument::from("i18n:account")];

        assert_eq!(resolver.translate("missing {0}", "en", &args), "missing {0}");
    }

    #[rstest]
    fn test_translate_fallback_text_is_interpolated(resolver: Resolver) {
        let args = [Argument::from("Ana"), Argument::from("i18n:account")];

        assert_eq!(resolver.translate("greeting", "de", &args), "Hi Ana, see Konto");
    }

    #[rstest]
    fn test_translate_sees_replaced_dictionary(resolver: Resolver) {
        let next = crate::dictionary::parse_dictionary(r#"{"hello": {"de": "Servus"}}"#).unwrap();

        resolver.store().replace(next);

        assert_eq!(resolver.translate("hello", "de", &[]), "Servus");
        assert_eq!(resolver.translate("welcome", "de", &[]), "welcome");
    }

    #[rstest]
    fn test_clones_share_the_store(resolver: Resolver) {
        let clone = resolver.clone();

        resolver.store().replace(crate::dictionary::Dictionary::new());

        assert_eq!(clone.translate("hello", "de", &[]), "hello");
    }

    #[rstest]
    fn test_translate_never_mixes_dictionaries_during_replace() {
        let snapshot = |tag: &str| {
            crate::dictionary::parse_dictionary(&format!(
                r#"{{"msg": {{"en": "{tag}:{{0}}"}}, "k": {{"en": "{tag}"}}}}"#
            ))
            .unwrap()
        };
        let resolver = Resolver::new(Arc::new(DictionaryStore::with_dictionary(snapshot("A"))));
        let args = [Argument::parse("i18n:k")];

        std::thread::scope(|scope| {
            let writer = scope.spawn(|| {
                for round in 0..500 {
                    let tag = if round % 2 == 0 { "B" } else { "A" };
                    resolver.store().replace(snapshot(tag));
                }
            });

            let readers: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        (0..2000)
                            .map(|_| resolver.translate("msg", "en", &args))
                            .find(|text| text != "A:A" && text != "B:B")
                    })
                })
                .collect();

            writer.join().unwrap();
            for reader in readers {
                assert_eq!(reader.join().unwrap(), None);
            }
        });
    }

    #[rstest]
    fn test_translate_diagnostics(resolver: Resolver) {
        let logs = capture_logs(|| {
            let _ = resolver.translate("missing.key", "en", &[]);
            let _ = resolver.translate("goodbye", "de", &[]);
            let _ = resolver.translate("only.german", "fr", &[]);
            let _ = resolver.translate("hello", "de", &[]);
        });

        assert!(logs.contains("translation key not found, using key as fallback"));
        assert!(logs.contains("missing.key"));
        assert!(logs.contains("requested language not found, falling back to 'en'"));
        assert!(logs.contains("no translation for requested language or 'en', using key as fallback"));
        assert_eq!(logs.lines().count(), 3);
    }

    #[rstest]
    fn test_nested_lookup_emits_no_diagnostics(resolver: Resolver) {
        let logs = capture_logs(|| {
            let _ = resolver.translate("error.invalidAmount", "en", &[Argument::from("i18n:nope")]);
        });

        assert_eq!(logs, "");
    }
}
