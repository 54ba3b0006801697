//! Domain-specific error types for zentry.
//!
//! Construction failures, locale lookups and configuration loading each get
//! their own error type so callers can tell a missing file apart from a
//! missing translation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort construction of a desktop entry.
#[derive(Error, Debug)]
pub enum EntryError {
    /// The path does not name an existing regular file.
    #[error("Desktop file not found: {0:?}")]
    NotFound(PathBuf),

    /// The path does not end in `.desktop`.
    #[error("Not a desktop file: {0:?}")]
    InvalidFormat(PathBuf),

    /// The file exists but could not be read as text.
    #[error("Failed to read desktop file {path:?}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors returned when looking up a localized value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No value was ever recorded for the requested locale.
    #[error("No '{locale}' value recorded for {key}")]
    LocaleNotFound { key: String, locale: String },
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config directory could not be determined.
    #[error("Config directory not found")]
    NoDirFound,

    /// Failed to read the config file.
    #[error("Failed to read config file: {0}")]
    ReadFailed(#[source] std::io::Error),

    /// Failed to parse the config file.
    #[error("Failed to parse config: {0}")]
    ParseFailed(#[source] toml::de::Error),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err)
    }
}
