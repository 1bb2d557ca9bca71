//! Translation lookups with language fallback and placeholder interpolation
/// Interpolation arguments
mod argument;
/// `{n}` placeholder substitution
mod interpolate;
/// Key and language fallback
mod lookup;
/// Translation entry point
mod translate;

pub use argument::{
    Argument,
    NESTED_KEY_PREFIX,
};
pub use interpolate::interpolate;
pub use lookup::{
    FALLBACK_LANGUAGE,
    Lookup,
    lookup,
};
pub use translate::Resolver;
