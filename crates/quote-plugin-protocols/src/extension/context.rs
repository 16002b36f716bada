//! Extension initialization context.

use std::sync::Arc;

use super::CapabilityRegistryAccess;

/// Context handed to [`super::Extension::initialize`].
#[derive(Clone)]
pub struct ExtensionContext {
    /// Registry the extension registers its capabilities into.
    pub capability_registry: Arc<dyn CapabilityRegistryAccess>,
}

impl ExtensionContext {
    pub fn new(capability_registry: Arc<dyn CapabilityRegistryAccess>) -> Self {
        Self {
            capability_registry,
        }
    }
}
