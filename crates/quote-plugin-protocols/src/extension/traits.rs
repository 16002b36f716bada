//! Extension trait definition.

use async_trait::async_trait;
use std::sync::Arc;

use super::{ExtensionContext, ExtensionManifest};
use crate::capability::Capability;
use crate::error::ExtensionError;

/// Core trait for extensions.
///
/// An extension bundles one or more capabilities and registers them with
/// the host's capability registry during initialization.
#[async_trait]
pub trait Extension: Send + Sync + 'static {
    /// Returns the extension manifest.
    fn manifest(&self) -> &ExtensionManifest;

    /// Initialize the extension with the given context.
    async fn initialize(&mut self, ctx: ExtensionContext) -> Result<(), ExtensionError>;

    /// Shutdown the extension.
    async fn shutdown(&self) -> Result<(), ExtensionError> {
        Ok(())
    }
}

/// Trait for accessing the capability registry from extensions.
pub trait CapabilityRegistryAccess: Send + Sync {
    /// Register a capability.
    fn register_capability(&self, capability: Arc<dyn Capability>) -> Result<(), ExtensionError>;

    /// Unregister a capability.
    fn unregister_capability(&self, capability_id: &str) -> Result<(), ExtensionError>;
}
