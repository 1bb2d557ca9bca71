use std::path::PathBuf;

use thiserror::Error;

/// Defines errors that may occur while loading a dictionary document
#[derive(Error, Debug)]
pub enum LoadError {
    /// The dictionary file does not exist
    #[error("dictionary file not found: {}", path.display())]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },
    /// Any other I/O failure while reading the dictionary file
    #[error("failed to read dictionary file {}: {source}", path.display())]
    Read {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The document is not an object of objects of strings
    #[error("failed to parse JSON dictionary: {0}")]
    Parse(#[from] serde_json::Error),
}
