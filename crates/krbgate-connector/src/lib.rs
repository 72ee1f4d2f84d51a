//! # krbgate-connector
//!
//! Kerberos credential-injecting decorator over a generic connector
//! capability.
//!
//! This crate defines the [`Connector`] trait (the capability surface of a
//! connection-acquiring driver) and [`KerberosConnector`], a drop-in
//! decorator that augments every connection attempt with Kerberos
//! authentication properties before delegating to the wrapped connector.
//! The heavy lifting (ticket exchange, authentication handshake, wire
//! protocol) stays inside the wrapped connector; this layer only mutates
//! properties and forwards.
//!
//! ## Example
//!
//! ```
//! use async_trait::async_trait;
//! use krbgate_common::{ConnectRequest, ConnectorVersion, CredentialContext, PropertyInfo};
//! use krbgate_connector::{Connector, ConnectorError, KerberosConnector, Result};
//!
//! // A stand-in for the vendor-supplied connector being wrapped.
//! struct StaticConnector;
//!
//! #[async_trait]
//! impl Connector for StaticConnector {
//!     type Handle = String;
//!
//!     fn accepts_target(&self, target: &str) -> bool {
//!         target.starts_with("db://")
//!     }
//!
//!     async fn connect(&self, request: &ConnectRequest) -> Result<String> {
//!         Ok(format!("session for {}", request.target))
//!     }
//!
//!     fn property_info(&self, _request: &ConnectRequest) -> Result<Vec<PropertyInfo>> {
//!         Err(ConnectorError::MetadataNotSupported)
//!     }
//!
//!     fn version(&self) -> ConnectorVersion {
//!         ConnectorVersion::new(1, 0)
//!     }
//!
//!     fn is_compliant(&self) -> bool {
//!         true
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let context = CredentialContext::new("/tmp/krbcc_1234")?;
//! let connector = KerberosConnector::new(StaticConnector, context);
//!
//! // Call sites are unchanged: same URL, same properties.
//! let request = ConnectRequest::new("db://analytics").with_property("user", "alice");
//! let session = connector.connect(&request).await?;
//! assert_eq!(session, "session for db://analytics");
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use krbgate_common::{ConnectRequest, ConnectorVersion, PropertyInfo};

pub mod error;
pub mod inject;
pub mod kerberos;
pub mod krb5;

pub use error::{ConnectorError, Result};
pub use inject::inject;
pub use kerberos::KerberosConnector;
pub use krb5::Krb5Registry;

/// Capability surface of a connection-acquiring driver.
///
/// Both vendor connectors and decorators such as [`KerberosConnector`]
/// implement this trait, so a decorator is substitutable anywhere the
/// wrapped connector is expected.
///
/// This layer imposes no timeout, retry, or cancellation policy on any
/// operation; those belong to implementations or their callers.
#[must_use = "a Connector must be used to acquire connections"]
#[async_trait]
pub trait Connector: Send + Sync {
    /// Handle to an established connection.
    ///
    /// Opaque to this layer; ownership transfers to the caller, whose
    /// release of the handle ends its lifecycle.
    type Handle: Send;

    /// Returns whether this connector handles the given target descriptor.
    fn accepts_target(&self, target: &str) -> bool;

    /// Attempts to establish a connection for `request`.
    ///
    /// May block according to the implementation's own policy.
    ///
    /// # Errors
    ///
    /// Returns a [`ConnectorError`] describing why the connection could
    /// not be established.
    async fn connect(&self, request: &ConnectRequest) -> Result<Self::Handle>;

    /// Describes the connection properties this connector understands for
    /// the given request.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::MetadataNotSupported`] when the connector
    /// cannot answer metadata queries, as distinct from an empty result.
    fn property_info(&self, request: &ConnectRequest) -> Result<Vec<PropertyInfo>>;

    /// Returns the connector's version.
    fn version(&self) -> ConnectorVersion;

    /// Returns whether the connector claims full compliance with its
    /// protocol specification.
    fn is_compliant(&self) -> bool;
}
