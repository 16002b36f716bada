//! Invocation dispatcher.
//!
//! Decodes a `/run` body into an [`InvocationRequest`], normalizes the
//! capability id, routes it through the [`CapabilityRegistry`] and wraps the
//! outcome in an [`InvocationResult`]. Faults are returned to the caller
//! unrecovered; the transport decides how to report them.

use std::sync::Arc;

use tracing::debug;

use quote_plugin_protocols::{
    CapabilityContext, CapabilityError, InvocationRequest, InvocationResult,
};

use crate::error::DispatchError;
use crate::registry::CapabilityRegistry;

/// Canonical lookup key for a raw capability id.
///
/// Trims surrounding whitespace, lower-cases, and replaces spaces with
/// underscores. Applying it twice yields the same key.
pub fn normalize_capability_id(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_")
}

/// Routes invocation envelopes to capabilities.
///
/// Holds no per-request state, so one instance is shared by all handlers.
pub struct Dispatcher {
    registry: Arc<CapabilityRegistry>,
    default_plugin_id: String,
}

impl Dispatcher {
    /// Create a dispatcher over `registry`; `default_plugin_id` is echoed when
    /// a request does not name a plugin.
    pub fn new(registry: Arc<CapabilityRegistry>, default_plugin_id: impl Into<String>) -> Self {
        Self {
            registry,
            default_plugin_id: default_plugin_id.into(),
        }
    }

    pub fn default_plugin_id(&self) -> &str {
        &self.default_plugin_id
    }

    pub fn registry(&self) -> &Arc<CapabilityRegistry> {
        &self.registry
    }

    /// Decode a raw request body.
    pub fn decode(body: &[u8]) -> Result<InvocationRequest, DispatchError> {
        let text = std::str::from_utf8(body)?;
        let value: serde_json::Value = serde_json::from_str(text)?;
        Ok(InvocationRequest::from_value(&value)?)
    }

    /// Decode and invoke a raw request body.
    pub async fn dispatch(&self, body: &[u8]) -> Result<InvocationResult, DispatchError> {
        let request = Self::decode(body)?;
        self.invoke(request).await
    }

    /// Invoke an already decoded request.
    pub async fn invoke(
        &self,
        request: InvocationRequest,
    ) -> Result<InvocationResult, DispatchError> {
        let plugin_id = request
            .plugin_id
            .unwrap_or_else(|| self.default_plugin_id.clone());
        let capability_id = normalize_capability_id(
            request
                .capability_id
                .as_deref()
                .unwrap_or(self.registry.default_id()),
        );

        let capability = self
            .registry
            .resolve(&capability_id)
            .ok_or_else(|| DispatchError::NoCapability(capability_id.clone()))?;

        if capability.id() != capability_id {
            debug!(
                requested = %capability_id,
                resolved = %capability.id(),
                "Unrecognized capability, using default"
            );
        }
        debug!(
            request_id = %request.request_id,
            plugin_id = %plugin_id,
            capability = %capability.id(),
            params = request.capability_parameters.len(),
            "Dispatching invocation"
        );

        let ctx = CapabilityContext::new(&request.request_id, &plugin_id, &capability_id);
        match capability.execute(request.capability_parameters, ctx).await {
            Ok(output) => Ok(InvocationResult::success(
                request.request_id,
                plugin_id,
                output.text,
            )
            .with_metadata(output.metadata)),
            Err(err @ CapabilityError::InvalidParameters(_)) => Err(DispatchError::Capability(err)),
            Err(err) => {
                debug!(capability = %capability.id(), error = %err, "Capability reported failure");
                Ok(InvocationResult::failure(
                    request.request_id,
                    plugin_id,
                    err.to_string(),
                ))
            }
        }
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
