//! Extension settings and the files they are read from
/// Block directive parser
mod directive;
/// Config file loader
mod loader;
/// Configuration types and settings
mod types;

pub use directive::{
    DIRECTIVE_NAME,
    DirectiveError,
    parse_directive,
};
pub use loader::load_from_path;
pub use types::{
    ConfigError,
    I18nSettings,
    ValidationError,
};
