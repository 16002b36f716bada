//! # Quote Plugin Protocols
//!
//! Protocol definitions shared by every crate of the quote plugin.
//! Contains only wire types and interface definitions - no implementations.
//!
//! ## Contents
//!
//! - [`InvocationRequest`] / [`InvocationResult`] - the invocation envelope
//!   exchanged with the Core over `POST /run`
//! - [`Capability`] - trait for named capability implementations
//! - [`Extension`] - trait for bundles of capabilities
//! - [`PluginRegistration`] - the descriptor advertised to the Core

pub mod capability;
pub mod envelope;
pub mod error;
pub mod extension;
pub mod registration;
pub mod types;

// Re-export core traits and types
pub use capability::{
    Capability, CapabilityContext, CapabilityDefinition, CapabilityOutput, CapabilityParam,
    CapabilityParameters,
};
pub use envelope::{InvocationRequest, InvocationResult};
pub use error::{CapabilityError, EnvelopeError, ExtensionError};
pub use extension::{CapabilityRegistryAccess, Extension, ExtensionContext, ExtensionManifest};
pub use registration::{PluginRegistration, RegistrationAck, TransportConfig, UnregistrationAck};
pub use types::Metadata;
