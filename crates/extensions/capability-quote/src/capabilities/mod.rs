//! Quote capability implementations.

mod get_quote;
mod get_quote_by_topic;

pub use get_quote::GetQuoteCapability;
pub use get_quote_by_topic::GetQuoteByTopicCapability;

use quote_plugin_protocols::{CapabilityError, CapabilityOutput};

use crate::quotes::{format_quote, select_quote, QuoteStyle};

/// Shared body of both capabilities: select, then render.
fn render_random_quote(
    topic: Option<&str>,
    style: Option<&str>,
) -> Result<CapabilityOutput, CapabilityError> {
    let quote = select_quote(topic)
        .ok_or_else(|| CapabilityError::ExecutionFailed("quote table is empty".to_string()))?;
    Ok(CapabilityOutput::text(format_quote(
        quote,
        QuoteStyle::from_param(style),
    )))
}
