//! Kerberos configuration loaded from TOML.
//!
//! ## Example Configuration
//!
//! ```toml
//! cache_path = "/tmp/krbcc_1234"
//! config_path = "/etc/krb5.conf"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::context::CredentialContext;
use crate::error::{ContextError, Result};

/// Kerberos settings as they appear in a configuration file.
///
/// Unlike [`CredentialContext`], this record carries no invariants; it is
/// the raw deserialized form. Convert it with [`KerberosConfig::into_context`]
/// to validate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KerberosConfig {
    /// Filesystem path to the credential cache.
    pub cache_path: PathBuf,

    /// Filesystem path to the realm configuration data.
    ///
    /// Defaults to the platform-conventional location when omitted.
    #[serde(default)]
    pub config_path: Option<PathBuf>,
}

impl KerberosConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file doesn't exist
    /// - The file cannot be read
    /// - Deserialization fails
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ContextError::Configuration(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates this configuration and converts it into a
    /// [`CredentialContext`].
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::InvalidArgument`] if the cache path is empty.
    pub fn into_context(self) -> Result<CredentialContext> {
        let context = CredentialContext::new(self.cache_path)?;

        Ok(match self.config_path {
            Some(config_path) => context.with_config_path(config_path),
            None => context,
        })
    }
}
