//! Errors raised while reading or checking a single config file.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists in the listing but could not be read.
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid TOML or does not fit the schema.
    #[error("Failed to parse TOML config at {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A value parsed but is not allowed, e.g. an unknown log level.
    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    /// The platform gave no home directory to put the user file under.
    #[error("No user config directory: {0}")]
    XdgError(String),
}
