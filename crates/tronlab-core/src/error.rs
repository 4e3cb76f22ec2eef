use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the edges of the engine (configuration, value maps,
/// document loading). Analysis itself never fails.
#[derive(Error, Debug)]
pub enum TronlabError {
    // Config errors
    #[error("CONFIG_PARSE_ERROR: failed to read '{path}': {reason}")]
    ConfigParseError { path: PathBuf, reason: String },

    #[error("CONFIG_INVALID: failed to parse tron.toml: {0}")]
    ConfigInvalid(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // Value map errors
    #[error("VALUE_MAP_INVALID: {0}")]
    ValueMapInvalid(String),

    #[error("VALUE_MAP_UNSUPPORTED_TYPE: value for '{name}' must be a scalar, found {found}")]
    ValueMapUnsupportedType { name: String, found: String },

    // Document errors
    #[error("DOCUMENT_READ_ERROR: failed to read '{path}': {reason}")]
    DocumentReadError { path: PathBuf, reason: String },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),

    // Generic errors
    #[error("{0}")]
    Generic(String),
}

impl From<serde_json::Error> for TronlabError {
    fn from(err: serde_json::Error) -> Self {
        TronlabError::Generic(format!("JSON error: {}", err))
    }
}

impl From<toml::de::Error> for TronlabError {
    fn from(err: toml::de::Error) -> Self {
        TronlabError::ConfigInvalid(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TronlabError>;
