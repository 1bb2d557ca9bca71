use thiserror::Error;

use crate::config::ConfigError;
use crate::dictionary::LoadError;

/// Errors that abort provisioning
#[derive(Error, Debug)]
pub enum ProvisionError {
    /// Settings failed validation
    #[error("invalid i18n settings: {0}")]
    Config(#[from] ConfigError),
    /// The dictionary could not be loaded
    #[error("failed to load i18n dictionary: {0}")]
    Load(#[from] LoadError),
}

/// Errors returned to the host for malformed function calls
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallError {
    #[error("{function}: missing required argument '{name}'")]
    MissingArgument { function: &'static str, name: &'static str },

    #[error("{function}: argument '{name}' must be a string")]
    InvalidArgument { function: &'static str, name: &'static str },

    #[error("unknown function: {0}")]
    UnknownFunction(String),
}
