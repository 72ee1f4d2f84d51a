//! Error types for connector implementations.

use thiserror::Error;

use krbgate_common::ContextError;

/// Errors that can occur when acquiring connections through a connector.
///
/// The Kerberos decorator never produces its own failures during
/// delegation; errors returned from a wrapped connector propagate
/// verbatim, so callers can match on this taxonomy exactly as if they had
/// called the wrapped connector directly.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConnectorError {
    /// A caller-supplied value is malformed.
    ///
    /// Most commonly an empty credential cache path at construction.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Missing or invalid credential configuration.
    ///
    /// An unreadable configuration file, an unset environment variable, or
    /// an incomplete configuration record.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The security subsystem rejected the credentials.
    ///
    /// An expired ticket, an unreachable key distribution center, or a
    /// failed mutual authentication exchange.
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The connection attempt failed after authentication concerns.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The connector does not handle the given target descriptor.
    #[error("Target not accepted: {0}")]
    TargetNotAccepted(String),

    /// Capability metadata queries are not supported by this connector.
    ///
    /// Distinct from an empty metadata result.
    #[error("Property metadata not supported by this connector")]
    MetadataNotSupported,

    /// I/O error from the underlying transport.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConnectorError {
    /// Check if this error signals an unsupported capability rather than a
    /// failed one.
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::MetadataNotSupported)
    }

    /// Check if this is a configuration error.
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Check if this is an invalid-argument error.
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl From<ContextError> for ConnectorError {
    fn from(err: ContextError) -> Self {
        match err {
            ContextError::InvalidArgument(msg) => Self::InvalidArgument(msg),
            ContextError::Configuration(msg) => Self::Configuration(msg),
            ContextError::Io(err) => Self::Io(err),
            ContextError::Toml(err) => Self::Configuration(err.to_string()),
        }
    }
}

/// Result type alias using [`ConnectorError`].
pub type Result<T> = std::result::Result<T, ConnectorError>;
