//! Kerberos property injection.

use krbgate_common::{ConnectProperties, CredentialContext, KERBEROS5_MECHANISM, keys};

/// Returns a new property map equal to `properties` plus the three fixed
/// Kerberos overrides.
///
/// The injected keys always win over caller-supplied values; callers
/// cannot opt out of authentication by pre-setting them. All other keys
/// pass through unchanged, and the input map is never modified.
///
/// Injected entries:
/// - [`keys::AUTHENTICATION_MECHANISM`] ← [`KERBEROS5_MECHANISM`]
/// - [`keys::MUTUAL_AUTHENTICATION`] ← `"true"`
/// - [`keys::CREDENTIAL_CACHE_PATH`] ← the context's cache path
///
/// # Examples
///
/// ```
/// use krbgate_common::{ConnectProperties, CredentialContext, keys};
/// use krbgate_connector::inject;
///
/// let context = CredentialContext::new("/tmp/krbcc_1234")?;
/// let mut properties = ConnectProperties::new();
/// properties.insert("user", "alice");
///
/// let injected = inject(&properties, &context);
/// assert_eq!(injected.get(keys::AUTHENTICATION_MECHANISM), Some("KERBEROS5"));
/// assert_eq!(injected.get(keys::MUTUAL_AUTHENTICATION), Some("true"));
/// assert_eq!(injected.get(keys::CREDENTIAL_CACHE_PATH), Some("/tmp/krbcc_1234"));
/// assert_eq!(injected.get("user"), Some("alice"));
/// # Ok::<(), krbgate_common::ContextError>(())
/// ```
#[must_use]
pub fn inject(properties: &ConnectProperties, context: &CredentialContext) -> ConnectProperties {
    let mut injected = properties.clone();
    injected.insert(keys::AUTHENTICATION_MECHANISM, KERBEROS5_MECHANISM);
    injected.insert(keys::MUTUAL_AUTHENTICATION, "true");
    injected.insert(
        keys::CREDENTIAL_CACHE_PATH,
        context.cache_path().to_string_lossy(),
    );
    injected
}
