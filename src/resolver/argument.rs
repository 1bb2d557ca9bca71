//! Interpolation arguments

use std::borrow::Cow;

use serde_json::{
    Number,
    Value,
};

use super::lookup::lookup;
use crate::dictionary::Dictionary;

/// Prefix that marks a textual argument as a nested translation key (e.g. `"i18n:account"`)
pub const NESTED_KEY_PREFIX: &str = "i18n:";

/// A positional argument substituted into a `{n}` placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    /// Literal text, used verbatim
    Text(String),
    /// Rendered in its shortest decimal form (`42`, `19.99`)
    Number(Number),
    /// Rendered as `true` / `false`
    Bool(bool),
    /// Translation key resolved in the requested language
    Key(String),
}

impl Argument {
    /// Classify a textual argument at the template boundary.
    ///
    /// Text starting with [`NESTED_KEY_PREFIX`] becomes [`Argument::Key`] with the prefix
    /// stripped; anything else is [`Argument::Text`].
    ///
    /// # Examples
    /// ```
    /// use dict_i18n::resolver::Argument;
    ///
    /// assert_eq!(Argument::parse("i18n:account"), Argument::Key("account".to_string()));
    /// assert_eq!(Argument::parse("alice"), Argument::Text("alice".to_string()));
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        text.strip_prefix(NESTED_KEY_PREFIX)
            .map_or_else(|| Self::Text(text.to_string()), |key| Self::Key(key.to_string()))
    }

    /// Convert a JSON value received from a host.
    ///
    /// Strings are classified with [`Argument::parse`]. `null`, arrays and objects have no
    /// natural text form and are rendered as compact JSON.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(text) => match text.strip_prefix(NESTED_KEY_PREFIX) {
                Some(key) => Self::Key(key.to_string()),
                None => Self::Text(text),
            },
            Value::Number(number) => Self::Number(number),
            Value::Bool(flag) => Self::Bool(flag),
            other @ (Value::Null | Value::Array(_) | Value::Object(_)) => {
                Self::Text(other.to_string())
            }
        }
    }

    /// Text substituted for this argument.
    ///
    /// [`Argument::Key`] is looked up in `lang` then `en`, and falls back to the key itself.
    /// The looked-up text is returned as stored, without placeholder substitution.
    #[must_use]
    pub fn render<'a>(&'a self, dictionary: &'a Dictionary, lang: &str) -> Cow<'a, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::Number(number) => Cow::Owned(render_number(number)),
            Self::Bool(flag) => Cow::Borrowed(if *flag { "true" } else { "false" }),
            Self::Key(key) => {
                Cow::Borrowed(lookup(dictionary, key, lang).text().unwrap_or(key.as_str()))
            }
        }
    }
}

/// Integers keep their exact digits; floats use the shortest round-trip form, so `5.0`
/// renders as `5` and `19.99` as `19.99`. Floats are always written positionally, never in
/// exponent notation (`1e21` → `1000000000000000000000`).
fn render_number(number: &Number) -> String {
    if number.is_f64() {
        number.as_f64().map_or_else(|| number.to_string(), |value| value.to_string())
    } else {
        number.to_string()
    }
}

impl From<&str> for Argument {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<String> for Argument {
    fn from(text: String) -> Self {
        Self::from_value(Value::String(text))
    }
}

impl From<Value> for Argument {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl From<bool> for Argument {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for Argument {
    /// Non-finite values have no JSON number form and are kept as text (`NaN`, `inf`).
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or_else(|| Self::Text(value.to_string()), Self::Number)
    }
}

/// `From` impls for integer types that `serde_json::Number` converts losslessly
macro_rules! impl_from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Argument {
                fn from(value: $ty) -> Self {
                    Self::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
