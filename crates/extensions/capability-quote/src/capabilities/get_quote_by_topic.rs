//! `get_quote_by_topic`: a random quote whose topic tag matches.

use async_trait::async_trait;
use tracing::debug;

use quote_plugin_protocols::{
    Capability, CapabilityContext, CapabilityDefinition, CapabilityError, CapabilityOutput,
    CapabilityParam, CapabilityParameters,
};

use super::render_random_quote;

/// Returns a random quote filtered by topic, or from the whole table when
/// the topic matches nothing.
pub struct GetQuoteByTopicCapability {
    definition: CapabilityDefinition,
}

impl GetQuoteByTopicCapability {
    pub const ID: &'static str = "get_quote_by_topic";

    pub fn new() -> Self {
        let definition = CapabilityDefinition::new(
            Self::ID,
            "Get quote by topic",
            "Returns a random quote filtered by topic (e.g. motivation, success, dreams).",
        )
        .with_parameter(
            CapabilityParam::string("topic")
                .required()
                .with_description("Topic: motivation, success, innovation, dreams, perseverance."),
        )
        .with_parameter(
            CapabilityParam::string("style").with_description("Output style: short or long."),
        )
        .with_output_description(r#"{"text": "quote and author string"}"#);

        Self { definition }
    }
}

impl Default for GetQuoteByTopicCapability {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Capability for GetQuoteByTopicCapability {
    fn definition(&self) -> &CapabilityDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: CapabilityParameters,
        ctx: CapabilityContext,
    ) -> Result<CapabilityOutput, CapabilityError> {
        let topic = params.optional_str("topic")?;
        let style = params.optional_str("style")?;
        debug!(request_id = %ctx.request_id, topic = ?topic, style = ?style, "get_quote_by_topic");
        render_random_quote(topic.as_deref(), style.as_deref())
    }
}
