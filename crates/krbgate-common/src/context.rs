//! Kerberos credential context.
//!
//! A [`CredentialContext`] names the external credential material a
//! connector needs: the credential cache holding a previously obtained
//! ticket, and the realm configuration describing the authentication
//! domain. It is a value object: immutable once constructed, with no
//! side effects of its own.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{ContextError, Result};

/// Conventional realm configuration location on Unix systems.
///
/// Callers deploying to other platforms should override it via
/// [`CredentialContext::with_config_path`] rather than rely on this
/// default being meaningful there.
pub const DEFAULT_KRB5_CONFIG_PATH: &str = "/etc/krb5.conf";

/// Environment variable naming the credential cache (MIT krb5 convention).
pub const KRB5_CACHE_ENV: &str = "KRB5CCNAME";

/// Environment variable naming the realm configuration (MIT krb5 convention).
pub const KRB5_CONFIG_ENV: &str = "KRB5_CONFIG";

/// Immutable paths to external Kerberos credential material.
///
/// The cache path is required and must be non-empty; the realm
/// configuration path defaults to [`DEFAULT_KRB5_CONFIG_PATH`].
///
/// # Examples
///
/// ```
/// use krbgate_common::CredentialContext;
///
/// let context = CredentialContext::new("/tmp/krbcc_1234")?
///     .with_config_path("/etc/krb5.conf");
///
/// assert_eq!(context.cache_path().to_str(), Some("/tmp/krbcc_1234"));
/// # Ok::<(), krbgate_common::ContextError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialContext {
    cache_path: PathBuf,
    config_path: PathBuf,
}

impl CredentialContext {
    /// Creates a context for the given credential cache path, with the
    /// default realm configuration path.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::InvalidArgument`] if `cache_path` is empty.
    pub fn new(cache_path: impl Into<PathBuf>) -> Result<Self> {
        let cache_path = cache_path.into();
        if cache_path.as_os_str().is_empty() {
            return Err(ContextError::InvalidArgument(
                "credential cache path must not be empty".to_string(),
            ));
        }

        Ok(Self {
            cache_path,
            config_path: PathBuf::from(DEFAULT_KRB5_CONFIG_PATH),
        })
    }

    /// Sets the realm configuration path.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Filesystem path to the realm configuration data
    #[must_use]
    pub fn with_config_path(mut self, config_path: impl Into<PathBuf>) -> Self {
        self.config_path = config_path.into();
        self
    }

    /// Builds a context from the MIT krb5 environment variables.
    ///
    /// Reads the cache path from `KRB5CCNAME` and, when set and non-empty,
    /// the realm configuration path from `KRB5_CONFIG`.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::Configuration`] if `KRB5CCNAME` is not set,
    /// or [`ContextError::InvalidArgument`] if it is set but empty.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var_os(key))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Result<Self> {
        let cache_path = lookup(KRB5_CACHE_ENV).ok_or_else(|| {
            ContextError::Configuration(format!("{KRB5_CACHE_ENV} is not set"))
        })?;

        let context = Self::new(cache_path)?;

        Ok(match lookup(KRB5_CONFIG_ENV) {
            Some(config_path) if !config_path.is_empty() => {
                context.with_config_path(config_path)
            }
            _ => context,
        })
    }

    /// Returns the credential cache path.
    #[must_use]
    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    /// Returns the realm configuration path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}
