//! Kerberos-authenticating decorator over a wrapped connector.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use krbgate_common::{
    ConnectRequest, ConnectorVersion, CredentialContext, KerberosConfig, PropertyInfo,
};

use crate::Connector;
use crate::error::Result;
use crate::inject::inject;
use crate::krb5::Krb5Registry;

/// Wraps a [`Connector`] so that every connection attempt carries Kerberos
/// authentication properties.
///
/// The decorator implements the same capability surface as the wrapped
/// connector and forwards every operation to it, intercepting only
/// [`connect`](Connector::connect): the caller's properties are augmented
/// via [`inject`] and the context's realm configuration path is registered
/// in the [`Krb5Registry`] before delegation. Results and failures from
/// the wrapped connector are returned verbatim.
///
/// A connector without a [`CredentialContext`] is not expressible: the
/// context is a required constructor argument, so an instance that would
/// silently omit authentication cannot be built.
///
/// # Examples
///
/// ```no_run
/// # use krbgate_common::{ConnectRequest, CredentialContext};
/// # use krbgate_connector::{Connector, KerberosConnector, Result};
/// # async fn example<C: Connector>(vendor_connector: C) -> Result<()> {
/// let context = CredentialContext::new("/tmp/krbcc_1234")?;
/// let connector = KerberosConnector::new(vendor_connector, context);
///
/// // Call sites keep their URL and properties unchanged.
/// let request = ConnectRequest::new("db://analytics").with_property("user", "alice");
/// let handle = connector.connect(&request).await?;
/// # Ok(())
/// # }
/// ```
pub struct KerberosConnector<C> {
    inner: C,
    context: CredentialContext,
    registry: Arc<Krb5Registry>,
}

impl<C> KerberosConnector<C> {
    /// Wraps `inner` with the given credential context.
    ///
    /// Registration uses the process-wide [`Krb5Registry`] unless
    /// [`with_registry`](Self::with_registry) replaces it.
    pub fn new(inner: C, context: CredentialContext) -> Self {
        Self {
            inner,
            context,
            registry: Krb5Registry::process(),
        }
    }

    /// Wraps `inner` with a context built from a credential cache path and
    /// the default realm configuration path.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::InvalidArgument`](crate::ConnectorError::InvalidArgument)
    /// if `cache_path` is empty.
    pub fn from_cache_path(inner: C, cache_path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::new(inner, CredentialContext::new(cache_path)?))
    }

    /// Wraps `inner` with a context built from a configuration record.
    ///
    /// # Errors
    ///
    /// Returns a [`Configuration`](crate::ConnectorError::Configuration) or
    /// [`InvalidArgument`](crate::ConnectorError::InvalidArgument) error if
    /// the record does not describe a usable context.
    pub fn from_config(inner: C, config: KerberosConfig) -> Result<Self> {
        Ok(Self::new(inner, config.into_context()?))
    }

    /// Wraps `inner` with a context built from the MIT krb5 environment
    /// variables (`KRB5CCNAME`, `KRB5_CONFIG`).
    ///
    /// # Errors
    ///
    /// Returns [`Configuration`](crate::ConnectorError::Configuration) if
    /// `KRB5CCNAME` is not set.
    pub fn from_env(inner: C) -> Result<Self> {
        Ok(Self::new(inner, CredentialContext::from_env()?))
    }

    /// Replaces the registration target.
    ///
    /// Callers that cannot tolerate the process-wide slot's last-writer-wins
    /// race can give each connector its own registry.
    #[must_use]
    pub fn with_registry(mut self, registry: Arc<Krb5Registry>) -> Self {
        self.registry = registry;
        self
    }

    /// Returns the credential context this connector injects.
    #[must_use]
    pub fn context(&self) -> &CredentialContext {
        &self.context
    }

    /// Returns a reference to the wrapped connector.
    #[must_use]
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Consumes the decorator, returning the wrapped connector.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C> fmt::Debug for KerberosConnector<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KerberosConnector")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<C: Connector> Connector for KerberosConnector<C> {
    type Handle = C::Handle;

    fn accepts_target(&self, target: &str) -> bool {
        self.inner.accepts_target(target)
    }

    async fn connect(&self, request: &ConnectRequest) -> Result<Self::Handle> {
        let augmented = ConnectRequest {
            target: request.target.clone(),
            properties: inject(&request.properties, &self.context),
        };

        self.registry.register(self.context.config_path());

        debug!(
            "connecting to {} with Kerberos authentication",
            augmented.target
        );
        self.inner.connect(&augmented).await
    }

    fn property_info(&self, request: &ConnectRequest) -> Result<Vec<PropertyInfo>> {
        self.inner.property_info(request)
    }

    fn version(&self) -> ConnectorVersion {
        self.inner.version()
    }

    fn is_compliant(&self) -> bool {
        self.inner.is_compliant()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use std::path::Path;
    use std::sync::Mutex;

    use krbgate_common::{KERBEROS5_MECHANISM, keys};

    use super::*;
    use crate::error::ConnectorError;

    // Mock connector recording every request it is asked to connect with.
    struct RecordingConnector {
        accepted_scheme: &'static str,
        seen: Mutex<Vec<ConnectRequest>>,
    }

    impl RecordingConnector {
        fn new() -> Self {
            Self {
                accepted_scheme: "db://",
                seen: Mutex::new(Vec::new()),
            }
        }

        fn last_request(&self) -> ConnectRequest {
            self.seen.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl Connector for RecordingConnector {
        type Handle = String;

        fn accepts_target(&self, target: &str) -> bool {
            target.starts_with(self.accepted_scheme)
        }

        async fn connect(&self, request: &ConnectRequest) -> Result<String> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(format!("session:{}", request.target))
        }

        fn property_info(&self, _request: &ConnectRequest) -> Result<Vec<PropertyInfo>> {
            Ok(vec![PropertyInfo::new("user").with_description("login name")])
        }

        fn version(&self) -> ConnectorVersion {
            ConnectorVersion::new(12, 2)
        }

        fn is_compliant(&self) -> bool {
            true
        }
    }

    // Mock connector failing every operation with a fixed taxonomy entry.
    struct FailingConnector;

    #[async_trait]
    impl Connector for FailingConnector {
        type Handle = String;

        fn accepts_target(&self, _target: &str) -> bool {
            false
        }

        async fn connect(&self, _request: &ConnectRequest) -> Result<String> {
            Err(ConnectorError::AuthenticationFailed(
                "ticket expired".to_string(),
            ))
        }

        fn property_info(&self, _request: &ConnectRequest) -> Result<Vec<PropertyInfo>> {
            Err(ConnectorError::MetadataNotSupported)
        }

        fn version(&self) -> ConnectorVersion {
            ConnectorVersion::new(0, 1)
        }

        fn is_compliant(&self) -> bool {
            false
        }
    }

    fn context() -> CredentialContext {
        CredentialContext::new("/tmp/krbcc_1234").unwrap()
    }

    fn isolated(inner: RecordingConnector) -> KerberosConnector<RecordingConnector> {
        KerberosConnector::new(inner, context()).with_registry(Arc::new(Krb5Registry::new()))
    }

    #[test]
    fn test_accepts_target_delegates() {
        let connector = isolated(RecordingConnector::new());
        assert!(connector.accepts_target("db://analytics"));
        assert!(!connector.accepts_target("ldap://directory"));

        let refusing = KerberosConnector::new(FailingConnector, context());
        assert!(!refusing.accepts_target("db://analytics"));
    }

    #[tokio::test]
    async fn test_connect_forwards_augmented_request() {
        let connector = isolated(RecordingConnector::new());
        let request = ConnectRequest::new("db://analytics").with_property("user", "alice");

        let handle = connector.connect(&request).await.unwrap();
        assert_eq!(handle, "session:db://analytics");

        let forwarded = connector.inner().last_request();
        assert_eq!(forwarded.target, "db://analytics");
        assert_eq!(forwarded.properties.len(), 4);
        assert_eq!(forwarded.property("user"), Some("alice"));
        assert_eq!(
            forwarded.property(keys::AUTHENTICATION_MECHANISM),
            Some(KERBEROS5_MECHANISM)
        );
        assert_eq!(forwarded.property(keys::MUTUAL_AUTHENTICATION), Some("true"));
        assert_eq!(
            forwarded.property(keys::CREDENTIAL_CACHE_PATH),
            Some("/tmp/krbcc_1234")
        );

        // The caller's request is left untouched.
        assert_eq!(request.properties.len(), 1);
    }

    #[tokio::test]
    async fn test_connect_registers_config_path() {
        let registry = Arc::new(Krb5Registry::new());
        let connector = KerberosConnector::new(
            RecordingConnector::new(),
            context().with_config_path("/srv/krb5.conf"),
        )
        .with_registry(Arc::clone(&registry));

        assert!(registry.current().is_none());
        connector
            .connect(&ConnectRequest::new("db://analytics"))
            .await
            .unwrap();
        assert_eq!(registry.current(), Some(PathBuf::from("/srv/krb5.conf")));
    }

    #[tokio::test]
    async fn test_connectors_with_different_config_paths_race_on_shared_registry() {
        // Two contexts sharing one registry: the slot holds whichever path
        // was registered last. The decorator documents this hazard rather
        // than hiding it.
        let registry = Arc::new(Krb5Registry::new());

        let first = KerberosConnector::new(
            RecordingConnector::new(),
            context().with_config_path("/etc/krb5.conf"),
        )
        .with_registry(Arc::clone(&registry));

        let second = KerberosConnector::new(
            RecordingConnector::new(),
            context().with_config_path("/srv/other-realm.conf"),
        )
        .with_registry(Arc::clone(&registry));

        first
            .connect(&ConnectRequest::new("db://analytics"))
            .await
            .unwrap();
        second
            .connect(&ConnectRequest::new("db://reporting"))
            .await
            .unwrap();

        assert_eq!(
            registry.current(),
            Some(PathBuf::from("/srv/other-realm.conf"))
        );
    }

    #[tokio::test]
    async fn test_connect_failure_propagates_verbatim() {
        let connector = KerberosConnector::new(FailingConnector, context())
            .with_registry(Arc::new(Krb5Registry::new()));

        let err = connector
            .connect(&ConnectRequest::new("db://analytics"))
            .await
            .unwrap_err();

        match err {
            ConnectorError::AuthenticationFailed(msg) => assert_eq!(msg, "ticket expired"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_property_info_forwards_unchanged() {
        let connector = isolated(RecordingConnector::new());
        let request = ConnectRequest::new("db://analytics");

        let info = connector.property_info(&request).unwrap();
        assert_eq!(info.len(), 1);
        assert_eq!(info[0].name, "user");

        let unsupported = KerberosConnector::new(FailingConnector, context());
        let err = unsupported.property_info(&request).unwrap_err();
        assert!(err.is_unsupported());
    }

    #[test]
    fn test_version_and_compliance_delegate() {
        let connector = isolated(RecordingConnector::new());
        assert_eq!(connector.version(), ConnectorVersion::new(12, 2));
        assert!(connector.is_compliant());
    }

    #[test]
    fn test_from_cache_path_rejects_empty_path() {
        let result = KerberosConnector::from_cache_path(RecordingConnector::new(), "");
        assert!(matches!(result, Err(ConnectorError::InvalidArgument(_))));
    }

    #[test]
    fn test_from_config() {
        let config = KerberosConfig {
            cache_path: PathBuf::from("/tmp/krbcc_1234"),
            config_path: Some(PathBuf::from("/srv/krb5.conf")),
        };
        let connector =
            KerberosConnector::from_config(RecordingConnector::new(), config).unwrap();
        assert_eq!(connector.context().config_path(), Path::new("/srv/krb5.conf"));

        let empty = KerberosConfig {
            cache_path: PathBuf::new(),
            config_path: None,
        };
        let result = KerberosConnector::from_config(RecordingConnector::new(), empty);
        assert!(matches!(result, Err(ConnectorError::InvalidArgument(_))));
    }

    #[test]
    fn test_into_inner_returns_wrapped_connector() {
        let connector = isolated(RecordingConnector::new());
        let inner = connector.into_inner();
        assert!(inner.seen.lock().unwrap().is_empty());
    }
}
