//! # Quote Plugin Core
//!
//! Capability dispatch for the quote plugin.
//!
//! ## Components
//!
//! - [`CapabilityRegistry`] - lookup table of capabilities keyed by normalized id,
//!   with a declared default used for unrecognized ids
//! - [`Dispatcher`] - turns raw `/run` bodies into [`InvocationResult`] envelopes
//!
//! [`InvocationResult`]: quote_plugin_protocols::InvocationResult

pub mod dispatcher;
pub mod error;
pub mod registry;

pub use dispatcher::{normalize_capability_id, Dispatcher};
pub use error::DispatchError;
pub use registry::CapabilityRegistry;
