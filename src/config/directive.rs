//! Block directive syntax for the extension settings
//!
//! ```text
//! i18n {
//!     dict_file <path/to/dictionary.json>
//! }
//! ```
//!
//! Tokens are separated by whitespace; a property and its arguments must sit on one
//! line. `{` and `}` are structural only as standalone unquoted tokens. Double quotes
//! group text containing spaces, and `#` starts a comment that runs to the end of the
//! line.

use std::iter::Peekable;
use std::path::PathBuf;
use std::slice::Iter;

use thiserror::Error;

use super::I18nSettings;

/// Name of the directive that carries the extension settings
pub const DIRECTIVE_NAME: &str = "i18n";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectiveError {
    #[error("line {line}: expected 'i18n' directive, found '{found}'")]
    UnexpectedDirective { line: usize, found: String },

    #[error("line {line}: wrong argument count or unexpected line ending after '{property}'")]
    ArgumentCount { line: usize, property: String },

    #[error("line {line}: unrecognized i18n config property: {property}")]
    UnrecognizedProperty { line: usize, property: String },

    #[error("line {line}: unexpected token '{token}'")]
    UnexpectedToken { line: usize, token: String },

    #[error("line {line}: block is never closed")]
    UnclosedBlock { line: usize },

    #[error("line {line}: unterminated quoted string")]
    UnterminatedQuote { line: usize },
}

/// A whitespace-delimited token with its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    /// Token text with quotes removed
    text: String,
    /// Line the token starts on
    line: usize,
    /// Whether the token was written in double quotes
    quoted: bool,
}

impl Token {
    /// Unquoted `{`
    fn opens_block(&self) -> bool {
        !self.quoted && self.text == "{"
    }

    /// Unquoted `}`
    fn closes_block(&self) -> bool {
        !self.quoted && self.text == "}"
    }
}

/// Parse one or more `i18n` directives into settings.
///
/// Later directives override earlier ones. An empty block, or a bare `i18n` without a
/// block, leaves every setting at its default.
///
/// # Errors
/// Returns [`DirectiveError`] for unknown properties, wrong argument counts, stray or
/// unbalanced braces and unterminated quotes.
pub fn parse_directive(input: &str) -> Result<I18nSettings, DirectiveError> {
    let tokens = tokenize(input)?;
    let mut cursor = tokens.iter().peekable();
    let mut settings = I18nSettings::default();

    while let Some(name) = cursor.next() {
        if name.quoted || name.text != DIRECTIVE_NAME {
            return Err(DirectiveError::UnexpectedDirective {
                line: name.line,
                found: name.text.clone(),
            });
        }

        match cursor.next_if(|token| token.line == name.line) {
            Some(token) if token.opens_block() => parse_block(&mut cursor, token.line, &mut settings)?,
            Some(token) => {
                return Err(DirectiveError::UnexpectedToken {
                    line: token.line,
                    token: token.text.clone(),
                });
            }
            None => {}
        }
    }

    Ok(settings)
}

/// Parse properties up to and including the closing `}`
fn parse_block(
    cursor: &mut Peekable<Iter<'_, Token>>,
    open_line: usize,
    settings: &mut I18nSettings,
) -> Result<(), DirectiveError> {
    loop {
        let Some(property) = cursor.next() else {
            return Err(DirectiveError::UnclosedBlock { line: open_line });
        };

        if property.closes_block() {
            return Ok(());
        }
        if property.opens_block() {
            return Err(DirectiveError::UnexpectedToken {
                line: property.line,
                token: property.text.clone(),
            });
        }

        let mut args = Vec::new();
        while let Some(arg) =
            cursor.next_if(|token| token.line == property.line && !token.closes_block())
        {
            args.push(arg);
        }

        match property.text.as_str() {
            "dict_file" => {
                let [path] = args.as_slice() else {
                    return Err(DirectiveError::ArgumentCount {
                        line: property.line,
                        property: property.text.clone(),
                    });
                };
                settings.dict_file = Some(PathBuf::from(&path.text));
            }
            _ => {
                return Err(DirectiveError::UnrecognizedProperty {
                    line: property.line,
                    property: property.text.clone(),
                });
            }
        }
    }
}

/// Split `input` into tokens, dropping comments
fn tokenize(input: &str) -> Result<Vec<Token>, DirectiveError> {
    let mut tokens = Vec::new();
    let mut line = 1;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\n' => line += 1,
            c if c.is_whitespace() => {}
            '#' => {
                while chars.next_if(|&next| next != '\n').is_some() {}
            }
            '"' => {
                let start_line = line;
                let mut text = String::new();
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') if chars.peek() == Some(&'"') => {
                            chars.next();
                            text.push('"');
                        }
                        Some(next) => {
                            if next == '\n' {
                                line += 1;
                            }
                            text.push(next);
                        }
                        None => return Err(DirectiveError::UnterminatedQuote { line: start_line }),
                    }
                }
                tokens.push(Token { text, line: start_line, quoted: true });
            }
            c => {
                let mut text = String::from(c);
                while let Some(next) = chars.next_if(|next| !next.is_whitespace()) {
                    text.push(next);
                }
                tokens.push(Token { text, line, quoted: false });
            }
        }
    }

    Ok(tokens)
}
