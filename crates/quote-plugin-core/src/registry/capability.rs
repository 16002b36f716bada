//! Capability registry: the dispatch lookup table.

use std::sync::Arc;

use quote_plugin_protocols::{
    Capability, CapabilityDefinition, CapabilityRegistryAccess, ExtensionError,
};

use super::base::{BaseRegistry, Registerable};

impl Registerable for dyn Capability {
    fn registry_id(&self) -> &str {
        &self.definition().id
    }
}

/// Registry of capabilities keyed by normalized capability id.
///
/// Carries a declared default id. Lookups for ids that are not registered
/// resolve to the default capability instead of failing, so adding a new
/// capability never changes how existing ids route.
pub struct CapabilityRegistry {
    inner: BaseRegistry<dyn Capability>,
    default_id: String,
}

impl CapabilityRegistry {
    /// Create a registry whose fallback is `default_id`.
    pub fn new(default_id: impl Into<String>) -> Self {
        Self {
            inner: BaseRegistry::new(),
            default_id: default_id.into(),
        }
    }

    /// The declared default capability id.
    pub fn default_id(&self) -> &str {
        &self.default_id
    }

    /// Register a capability.
    pub fn register(&self, capability: Arc<dyn Capability>) -> Result<(), ExtensionError> {
        self.inner.register(capability)
    }

    /// Unregister a capability.
    pub fn unregister(&self, id: &str) -> Result<(), ExtensionError> {
        self.inner.unregister(id)
    }

    /// Get a capability by exact id.
    pub fn get(&self, id: &str) -> Option<Arc<dyn Capability>> {
        self.inner.get(id)
    }

    /// Resolve an id to a capability, falling back to the default one.
    ///
    /// Returns `None` only when neither `id` nor the default is registered.
    pub fn resolve(&self, id: &str) -> Option<Arc<dyn Capability>> {
        self.inner.get(id).or_else(|| self.inner.get(&self.default_id))
    }

    /// List all capability definitions, sorted by id.
    pub fn list(&self) -> Vec<CapabilityDefinition> {
        let mut definitions: Vec<CapabilityDefinition> =
            self.inner.iter().map(|c| c.definition().clone()).collect();
        definitions.sort_by(|a, b| a.id.cmp(&b.id));
        definitions
    }

    pub fn list_ids(&self) -> Vec<String> {
        self.inner.list_ids()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl CapabilityRegistryAccess for CapabilityRegistry {
    fn register_capability(&self, capability: Arc<dyn Capability>) -> Result<(), ExtensionError> {
        self.register(capability)
    }

    fn unregister_capability(&self, capability_id: &str) -> Result<(), ExtensionError> {
        self.unregister(capability_id)
    }
}
