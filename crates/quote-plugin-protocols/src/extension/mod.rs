//! Extension protocol definitions.

mod context;
mod manifest;
mod traits;

pub use context::ExtensionContext;
pub use manifest::ExtensionManifest;
pub use traits::{CapabilityRegistryAccess, Extension};
