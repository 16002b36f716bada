//! Quote extension definition.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use quote_plugin_protocols::{Extension, ExtensionContext, ExtensionError, ExtensionManifest};

use crate::capabilities::{GetQuoteByTopicCapability, GetQuoteCapability};
use crate::quotes::QUOTES;

/// Quote extension.
pub struct QuoteExtension {
    manifest: ExtensionManifest,
}

impl QuoteExtension {
    pub fn new() -> Self {
        let manifest = ExtensionManifest::new("capability-quote", "Quotes", "0.1.0")
            .with_description("Random inspirational quotes, optionally filtered by topic")
            .providing(GetQuoteCapability::ID)
            .providing(GetQuoteByTopicCapability::ID);

        Self { manifest }
    }
}

impl Default for QuoteExtension {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Extension for QuoteExtension {
    fn manifest(&self) -> &ExtensionManifest {
        &self.manifest
    }

    async fn initialize(&mut self, ctx: ExtensionContext) -> Result<(), ExtensionError> {
        if QUOTES.is_empty() {
            return Err(ExtensionError::InitializationFailed(
                "quote table is empty".to_string(),
            ));
        }

        ctx.capability_registry
            .register_capability(Arc::new(GetQuoteCapability::new()))?;
        ctx.capability_registry
            .register_capability(Arc::new(GetQuoteByTopicCapability::new()))?;

        info!(quotes = QUOTES.len(), "Quote extension initialized");
        Ok(())
    }
}
