//! Quote capabilities for the quote plugin.
//!
//! Provides `get_quote` and `get_quote_by_topic` over a static quote table.

mod capabilities;
mod extension;
pub mod quotes;

pub use capabilities::{GetQuoteByTopicCapability, GetQuoteCapability};
pub use extension::QuoteExtension;
pub use quotes::{format_quote, select_quote, Quote, QuoteStyle, QUOTES};
