//! Invocation envelope exchanged between the Core and the plugin.
//!
//! The Core POSTs an [`InvocationRequest`] to `/run` and expects exactly one
//! [`InvocationResult`] back. The result always carries all six fields so the
//! schema stays stable regardless of outcome.

mod request;
mod result;

pub use request::InvocationRequest;
pub use result::InvocationResult;
