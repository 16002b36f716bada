//! Registries used by the dispatcher.

mod base;
mod capability;

pub use base::{BaseRegistry, Registerable};
pub use capability::CapabilityRegistry;
