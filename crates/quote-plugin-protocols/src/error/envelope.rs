//! Invocation envelope decoding errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("Invocation request must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("Invalid field '{field}': expected {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}
