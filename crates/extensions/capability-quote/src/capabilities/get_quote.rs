//! `get_quote`: a random quote from the whole table.

use async_trait::async_trait;
use tracing::debug;

use quote_plugin_protocols::{
    Capability, CapabilityContext, CapabilityDefinition, CapabilityError, CapabilityOutput,
    CapabilityParam, CapabilityParameters,
};

use super::render_random_quote;

const REFLECTION_PROMPT: &str = "The user received this quote. Add one short sentence \
    (under 15 words) that reflects why this quote matters or how it can inspire them. \
    Do not repeat the quote.";

/// Returns a random quote, ignoring any topic.
pub struct GetQuoteCapability {
    definition: CapabilityDefinition,
}

impl GetQuoteCapability {
    pub const ID: &'static str = "get_quote";

    pub fn new() -> Self {
        let definition = CapabilityDefinition::new(
            Self::ID,
            "Get random quote",
            "Returns a random inspirational quote. Core will add a brief reflection (post_process).",
        )
        .with_parameter(
            CapabilityParam::string("style")
                .with_description("Output style: short (quote only) or long (with label)."),
        )
        .with_output_description(r#"{"text": "quote and author string"}"#)
        .with_post_process(REFLECTION_PROMPT);

        Self { definition }
    }
}

impl Default for GetQuoteCapability {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Capability for GetQuoteCapability {
    fn definition(&self) -> &CapabilityDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: CapabilityParameters,
        ctx: CapabilityContext,
    ) -> Result<CapabilityOutput, CapabilityError> {
        let style = params.optional_str("style")?;
        debug!(request_id = %ctx.request_id, style = ?style, "get_quote");
        render_random_quote(None, style.as_deref())
    }
}
