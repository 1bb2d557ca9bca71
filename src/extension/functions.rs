//! Template functions exposed to the host

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use super::CallError;
use crate::resolver::{
    Argument,
    Resolver,
};

/// Name under which the translate function is registered
pub const TRANSLATE_FUNCTION: &str = "i18nTranslate";

/// A host-callable function over JSON arguments
pub type TemplateFunction = Arc<dyn Fn(&[Value]) -> Result<String, CallError> + Send + Sync>;

/// Function name → callable
pub type FunctionMap = HashMap<&'static str, TemplateFunction>;

/// Build the function map backed by `resolver`
pub(super) fn function_map(resolver: &Resolver) -> FunctionMap {
    let resolver = resolver.clone();
    let translate: TemplateFunction =
        Arc::new(move |args: &[Value]| call_translate(&resolver, args));

    HashMap::from([(TRANSLATE_FUNCTION, translate)])
}

/// `i18nTranslate(key, lang, args...)`
///
/// `key` and `lang` must be strings. The remaining values become [`Argument`]s;
/// strings starting with `i18n:` are treated as nested keys.
fn call_translate(resolver: &Resolver, args: &[Value]) -> Result<String, CallError> {
    let (key, rest) = args.split_first().ok_or(CallError::MissingArgument {
        function: TRANSLATE_FUNCTION,
        name: "key",
    })?;
    let (lang, rest) = rest.split_first().ok_or(CallError::MissingArgument {
        function: TRANSLATE_FUNCTION,
        name: "lang",
    })?;

    let key = key
        .as_str()
        .ok_or(CallError::InvalidArgument { function: TRANSLATE_FUNCTION, name: "key" })?;
    let lang = lang
        .as_str()
        .ok_or(CallError::InvalidArgument { function: TRANSLATE_FUNCTION, name: "lang" })?;

    let args: Vec<Argument> = rest.iter().cloned().map(Argument::from_value).collect();

    Ok(resolver.translate(key, lang, &args))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;
    use serde_json::json;

    use super::*;
    use crate::dictionary::DictionaryStore;

    #[fixture]
    fn translate() -> TemplateFunction {
        let store = DictionaryStore::from_json_str(
            r#"{
                "hello": {"de": "Hallo", "en": "Hello"},
                "account": {"en": "Account", "de": "Konto"},
                "system": {"en": "System"},
                "error.invalidAmount": {"en": "Invalid amount: {0}", "de": "Ungültiger Betrag: {0}"},
                "error.generic": {"en": "Error: {0} with code {1} for user {2}"},
                "price": {"en": "Price: {0} EUR"}
            }"#,
        )
        .unwrap();
        let functions = function_map(&Resolver::new(Arc::new(store)));
        Arc::clone(functions.get(TRANSLATE_FUNCTION).unwrap())
    }

    #[rstest]
    #[case::simple(json!(["hello", "de"]), "Hallo")]
    #[case::fallback(json!(["hello", "fr"]), "Hello")]
    #[case::missing_key(json!(["nope", "de"]), "nope")]
    #[case::nested(json!(["error.invalidAmount", "de", "i18n:account"]), "Ungültiger Betrag: Konto")]
    #[case::mixed(
        json!(["error.generic", "en", "i18n:system", 500, "alice"]),
        "Error: System with code 500 for user alice"
    )]
    #[case::decimal(json!(["price", "en", 19.99]), "Price: 19.99 EUR")]
    fn test_translate_function(
        translate: TemplateFunction,
        #[case] args: Value,
        #[case] expected: &str,
    ) {
        let args = args.as_array().unwrap().as_slice();

        assert_that!(translate(args), ok(eq(expected)));
    }

    #[rstest]
    #[case::no_args(json!([]), CallError::MissingArgument { function: TRANSLATE_FUNCTION, name: "key" })]
    #[case::no_lang(json!(["hello"]), CallError::MissingArgument { function: TRANSLATE_FUNCTION, name: "lang" })]
    #[case::numeric_key(json!([1, "en"]), CallError::InvalidArgument { function: TRANSLATE_FUNCTION, name: "key" })]
    #[case::null_lang(json!(["hello", null]), CallError::InvalidArgument { function: TRANSLATE_FUNCTION, name: "lang" })]
    fn test_translate_function_malformed_call(
        translate: TemplateFunction,
        #[case] args: Value,
        #[case] expected: CallError,
    ) {
        let args = args.as_array().unwrap().as_slice();

        assert_that!(translate(args), err(eq(&expected)));
    }

    #[rstest]
    fn test_function_map_contents() {
        let functions = function_map(&Resolver::default());

        assert_that!(functions.len(), eq(1));
        assert_that!(functions.contains_key(TRANSLATE_FUNCTION), eq(true));
    }
}
