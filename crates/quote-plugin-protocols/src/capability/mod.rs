//! Capability protocol definitions.

mod context;
mod definition;
mod traits;

pub use context::{CapabilityContext, CapabilityOutput, CapabilityParameters};
pub use definition::{CapabilityDefinition, CapabilityParam};
pub use traits::Capability;
