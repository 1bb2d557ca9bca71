//! Translation dictionary storage
/// Load errors
mod error;
/// Reader/writer guarded dictionary store
mod store;

pub use error::LoadError;
pub use store::{
    Dictionary,
    DictionaryStore,
    LocaleMap,
    load_dictionary,
    parse_dictionary,
};
