//! Dispatch fault types.
//!
//! A `DispatchError` means the request could not be turned into an
//! invocation result at all. The transport answers these with `500` and a
//! best-effort failure envelope.

use thiserror::Error;

use quote_plugin_protocols::{CapabilityError, EnvelopeError};

#[derive(Debug, Error)]
pub enum DispatchError {
    /// Body is not UTF-8 text.
    #[error("Request body is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    /// Body is not well-formed JSON.
    #[error("Malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// JSON is well-formed but not a usable invocation envelope.
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    /// Capability rejected its parameters.
    #[error(transparent)]
    Capability(CapabilityError),

    /// Neither the requested nor the default capability is registered.
    #[error("No capability available for '{0}'")]
    NoCapability(String),
}
