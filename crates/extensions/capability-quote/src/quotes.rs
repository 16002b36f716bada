//! Static quote table, selection and formatting.

use rand::seq::SliceRandom;
use rand::Rng;

/// One quote record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
    /// Topic tag used for filtering.
    pub topic: &'static str,
}

impl Quote {
    const fn new(text: &'static str, author: &'static str, topic: &'static str) -> Self {
        Self {
            text,
            author,
            topic,
        }
    }

    /// Whether the topic tag contains `topic`, ignoring case.
    pub fn matches_topic(&self, topic: &str) -> bool {
        self.topic.to_lowercase().contains(&topic.to_lowercase())
    }
}

/// Process-wide quote table. Never mutated.
pub static QUOTES: &[Quote] = &[
    Quote::new(
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
        "motivation",
    ),
    Quote::new(
        "Innovation distinguishes between a leader and a follower.",
        "Steve Jobs",
        "innovation",
    ),
    Quote::new("Stay hungry, stay foolish.", "Steve Jobs", "motivation"),
    Quote::new(
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
        "dreams",
    ),
    Quote::new(
        "It is during our darkest moments that we must focus to see the light.",
        "Aristotle",
        "perseverance",
    ),
    Quote::new(
        "Success is not final, failure is not fatal.",
        "Winston Churchill",
        "success",
    ),
    Quote::new(
        "The only impossible journey is the one you never begin.",
        "Tony Robbins",
        "motivation",
    ),
];

/// Output rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    /// `"<quote>" — <author>`
    Short,
    /// `Quote: "<quote>"` and `Author: <author>` on two lines.
    #[default]
    Long,
}

impl QuoteStyle {
    /// `short` (any case) selects [`QuoteStyle::Short`]; anything else is long.
    pub fn from_param(style: Option<&str>) -> Self {
        match style {
            Some(s) if s.eq_ignore_ascii_case("short") => Self::Short,
            _ => Self::Long,
        }
    }
}

/// Candidate records for `topic`.
///
/// Records whose tag contains the topic; the full table when no topic is
/// given or nothing matches.
pub fn candidate_pool(topic: Option<&str>) -> Vec<&'static Quote> {
    if let Some(topic) = topic.filter(|t| !t.is_empty()) {
        let filtered: Vec<&'static Quote> =
            QUOTES.iter().filter(|q| q.matches_topic(topic)).collect();
        if !filtered.is_empty() {
            return filtered;
        }
    }
    QUOTES.iter().collect()
}

/// Pick one record uniformly from the candidate pool.
pub fn select_quote_with<R: Rng + ?Sized>(topic: Option<&str>, rng: &mut R) -> Option<&'static Quote> {
    candidate_pool(topic).choose(rng).copied()
}

/// Pick one record using the calling thread's generator.
pub fn select_quote(topic: Option<&str>) -> Option<&'static Quote> {
    select_quote_with(topic, &mut rand::thread_rng())
}

/// Render a record in the requested style.
pub fn format_quote(quote: &Quote, style: QuoteStyle) -> String {
    match style {
        QuoteStyle::Short => format!("\"{}\" — {}", quote.text, quote.author),
        QuoteStyle::Long => format!("Quote: \"{}\"\nAuthor: {}", quote.text, quote.author),
    }
}

#[cfg(test)]
#[path = "quotes_tests.rs"]
mod tests;
