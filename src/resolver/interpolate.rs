//! `{n}` placeholder substitution

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{
    Captures,
    Regex,
};

use super::Argument;
use crate::dictionary::Dictionary;

/// `{` + ASCII digits + `}`
static PLACEHOLDER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"\{([0-9]+)\}")
        .map_err(|e| tracing::error!("Failed to compile placeholder pattern: {e}"))
        .ok()
});

/// Substitute `{0}`, `{1}`, ... in `template` with `args`.
///
/// - Indices without a matching argument are left as literal `{n}` text.
/// - [`Argument::Key`] values are looked up in `lang` (then `en`) and inserted as stored;
///   their text is never scanned for placeholders.
/// - Everything else in `template` is copied unchanged.
///
/// The template is scanned once, left to right.
///
/// # Examples
/// ```
/// use dict_i18n::dictionary::Dictionary;
/// use dict_i18n::resolver::{Argument, interpolate};
///
/// let args = [Argument::from("hello")];
/// let out = interpolate("Value: {0} and {5}", &args, &Dictionary::new(), "en");
/// assert_eq!(out, "Value: hello and {5}");
/// ```
#[must_use]
pub fn interpolate(
    template: &str,
    args: &[Argument],
    dictionary: &Dictionary,
    lang: &str,
) -> String {
    let Some(pattern) = PLACEHOLDER.as_ref() else {
        return template.to_string();
    };

    pattern
        .replace_all(template, |caps: &Captures<'_>| substitute(caps, args, dictionary, lang))
        .into_owned()
}

/// Replacement for a single placeholder match
fn substitute<'a>(
    caps: &Captures<'_>,
    args: &'a [Argument],
    dictionary: &'a Dictionary,
    lang: &str,
) -> Cow<'a, str> {
    let token = caps.get(0).map_or("", |m| m.as_str());

    // Indices too large for usize are out of range as well
    let argument = caps
        .get(1)
        .and_then(|digits| digits.as_str().parse::<usize>().ok())
        .and_then(|index| args.get(index));

    argument.map_or_else(
        || Cow::Owned(token.to_string()),
        |argument| argument.render(dictionary, lang),
    )
}
