//! Connection requests and property maps.
//!
//! A [`ConnectRequest`] is created per connection attempt and carries an
//! opaque target descriptor plus caller-supplied [`ConnectProperties`].
//! This layer never mutates a caller's property map in place; augmented
//! maps are always new values.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Property value denoting the Kerberos v5 authentication mechanism.
pub const KERBEROS5_MECHANISM: &str = "KERBEROS5";

/// Well-known property keys understood by Kerberos-aware connectors.
pub mod keys {
    /// Selects the authentication mechanism used for the connection.
    pub const AUTHENTICATION_MECHANISM: &str = "auth-mechanism";

    /// Enables mutual authentication (server proves its identity too).
    pub const MUTUAL_AUTHENTICATION: &str = "mutual-auth";

    /// Filesystem path to the credential cache holding the ticket.
    pub const CREDENTIAL_CACHE_PATH: &str = "cred-cache-path";
}

/// A string-to-string property map passed to a connector.
///
/// # Examples
///
/// ```
/// use krbgate_common::ConnectProperties;
///
/// let mut properties = ConnectProperties::new();
/// properties.insert("user", "alice");
///
/// assert_eq!(properties.get("user"), Some("alice"));
/// assert_eq!(properties.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectProperties(HashMap<String, String>);

impl ConnectProperties {
    /// Creates an empty property map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a property, returning the previous value for the key if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns whether `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(key, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates over the property keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<HashMap<String, String>> for ConnectProperties {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ConnectProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl IntoIterator for ConnectProperties {
    type Item = (String, String);
    type IntoIter = std::collections::hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// A single connection attempt: an opaque target descriptor plus
/// caller-supplied properties.
///
/// The target descriptor is not interpreted by this layer; whether it is
/// accepted is entirely the underlying connector's decision.
///
/// # Examples
///
/// ```
/// use krbgate_common::ConnectRequest;
///
/// let request = ConnectRequest::new("db://analytics")
///     .with_property("user", "alice");
///
/// assert_eq!(request.property("user"), Some("alice"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectRequest {
    /// Opaque connection target descriptor.
    pub target: String,
    /// Caller-supplied connection properties.
    pub properties: ConnectProperties,
}

impl ConnectRequest {
    /// Creates a request for the given target with no properties.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            properties: ConnectProperties::new(),
        }
    }

    /// Adds a single property.
    ///
    /// # Arguments
    ///
    /// * `key` - Property name
    /// * `value` - Property value
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key, value);
        self
    }

    /// Replaces the property map.
    #[must_use]
    pub fn with_properties(mut self, properties: impl Into<ConnectProperties>) -> Self {
        self.properties = properties.into();
        self
    }

    /// Returns the value of a property, if present.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key)
    }
}
