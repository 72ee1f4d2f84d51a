//! Error types for credential context construction and configuration.

use thiserror::Error;

/// Errors that can occur while building a credential context or loading
/// its configuration.
#[derive(Debug, Error)]
pub enum ContextError {
    /// A caller-supplied value is malformed.
    ///
    /// Most commonly an empty credential cache path.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The configuration source is missing or incomplete.
    ///
    /// A missing configuration file or an unset environment variable.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O error while reading a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias using [`ContextError`].
pub type Result<T> = std::result::Result<T, ContextError>;
