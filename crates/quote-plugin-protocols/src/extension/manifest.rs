//! Extension manifest.

use serde::{Deserialize, Serialize};

/// Metadata describing an extension and the capabilities it provides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionManifest {
    /// Unique extension identifier.
    pub id: String,

    /// Human-readable name.
    pub name: String,

    /// Semantic version string.
    pub version: String,

    /// Short description.
    #[serde(default)]
    pub description: String,

    /// Capability ids this extension registers.
    #[serde(default)]
    pub provides: Vec<String>,
}

impl ExtensionManifest {
    pub fn new(id: impl Into<String>, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version: version.into(),
            description: String::new(),
            provides: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Declare a provided capability.
    pub fn providing(mut self, capability_id: impl Into<String>) -> Self {
        self.provides.push(capability_id.into());
        self
    }
}
