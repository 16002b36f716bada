//! Outbound invocation result.

use serde::{Deserialize, Serialize};

use crate::types::Metadata;

/// Uniform result envelope returned to the Core.
///
/// `text` is meaningful when `success` is true, `error` when it is false.
/// Both are always serialized; `error` is `null` on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationResult {
    pub request_id: String,
    pub plugin_id: String,
    pub success: bool,
    pub text: String,
    pub error: Option<String>,
    pub metadata: Metadata,
}

impl InvocationResult {
    /// Create a successful result.
    pub fn success(
        request_id: impl Into<String>,
        plugin_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            plugin_id: plugin_id.into(),
            success: true,
            text: text.into(),
            error: None,
            metadata: Metadata::new(),
        }
    }

    /// Create a failed result. `text` is left empty.
    pub fn failure(
        request_id: impl Into<String>,
        plugin_id: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            plugin_id: plugin_id.into(),
            success: false,
            text: String::new(),
            error: Some(error.into()),
            metadata: Metadata::new(),
        }
    }

    /// Replace the metadata map.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }
}
