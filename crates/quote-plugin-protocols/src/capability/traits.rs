//! Capability trait definition.

use async_trait::async_trait;

use super::{CapabilityContext, CapabilityDefinition, CapabilityOutput, CapabilityParameters};
use crate::error::CapabilityError;

/// Core trait for capabilities.
///
/// A capability is a named function the plugin offers to the Core.
/// Implementations must be safe to execute concurrently.
#[async_trait]
pub trait Capability: Send + Sync {
    /// Returns the capability definition.
    fn definition(&self) -> &CapabilityDefinition;

    /// Execute the capability with the given parameters.
    async fn execute(
        &self,
        params: CapabilityParameters,
        ctx: CapabilityContext,
    ) -> Result<CapabilityOutput, CapabilityError>;

    /// Returns the capability identifier.
    fn id(&self) -> &str {
        &self.definition().id
    }
}
