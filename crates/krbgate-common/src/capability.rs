//! Connector capability metadata.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Version reported by a connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorVersion {
    /// Major version number.
    pub major: u32,
    /// Minor version number.
    pub minor: u32,
}

impl ConnectorVersion {
    /// Creates a version from its components.
    #[must_use]
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for ConnectorVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Describes one connection property a connector understands for a given
/// target, as returned by a capability metadata query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyInfo {
    /// Property name.
    pub name: String,
    /// Current value, if one is known.
    pub value: Option<String>,
    /// Human-readable description.
    pub description: Option<String>,
    /// Whether the property must be supplied to connect.
    #[serde(default)]
    pub required: bool,
    /// Permitted values, when the property is an enumeration.
    #[serde(default)]
    pub choices: Vec<String>,
}

impl PropertyInfo {
    /// Creates a property description with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            description: None,
            required: false,
            choices: Vec::new(),
        }
    }

    /// Sets the current value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the property as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the permitted values.
    #[must_use]
    pub fn with_choices(
        mut self,
        choices: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }
}
