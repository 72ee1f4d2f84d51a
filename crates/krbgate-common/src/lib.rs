//! # krbgate-common
//!
//! Common types for Kerberos-aware connection brokering.
//!
//! This crate provides the foundational types shared by connector
//! implementations and the Kerberos decorator:
//! - Credential contexts naming external ticket and realm material
//! - Connection requests and string property maps
//! - Connector capability metadata
//! - Configuration records loadable from TOML or the environment
//!
//! ## Example
//!
//! ```
//! use krbgate_common::{ConnectRequest, CredentialContext};
//!
//! // Name the credential material once per connector
//! let context = CredentialContext::new("/tmp/krbcc_1234")?
//!     .with_config_path("/etc/krb5.conf");
//!
//! // Build a per-call connection request
//! let request = ConnectRequest::new("db://analytics")
//!     .with_property("user", "alice");
//!
//! assert_eq!(request.property("user"), Some("alice"));
//! # Ok::<(), krbgate_common::ContextError>(())
//! ```

/// Connector capability metadata types.
///
/// Version information and per-property descriptions returned by
/// capability metadata queries.
pub mod capability;
/// Configuration records for Kerberos credential material.
pub mod config;
/// Connection requests and property maps.
pub mod connect;
/// Immutable Kerberos credential contexts.
pub mod context;
/// Error types for context construction and configuration.
pub mod error;

pub use capability::{ConnectorVersion, PropertyInfo};
pub use config::KerberosConfig;
pub use connect::{ConnectProperties, ConnectRequest, KERBEROS5_MECHANISM, keys};
pub use context::{
    CredentialContext, DEFAULT_KRB5_CONFIG_PATH, KRB5_CACHE_ENV, KRB5_CONFIG_ENV,
};
pub use error::{ContextError, Result};
