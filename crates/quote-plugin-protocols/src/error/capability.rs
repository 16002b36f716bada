//! Capability execution errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CapabilityError {
    #[error("Capability not found: {0}")]
    NotFound(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Capability execution failed: {0}")]
    ExecutionFailed(String),
}

impl CapabilityError {
    /// Whether the error stems from the caller's input rather than the capability itself.
    pub fn is_input_fault(&self) -> bool {
        matches!(self, Self::InvalidParameters(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_error_not_found() {
        let err = CapabilityError::NotFound("get_weather".to_string());
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains("get_weather"));
    }

    #[test]
    fn test_capability_error_invalid_parameters() {
        let err = CapabilityError::InvalidParameters("topic must be a string".to_string());
        assert!(err.to_string().contains("Invalid parameters"));
        assert!(err.is_input_fault());
    }

    #[test]
    fn test_capability_error_execution_failed() {
        let err = CapabilityError::ExecutionFailed("quote table empty".to_string());
        assert!(err.to_string().contains("execution failed"));
        assert!(!err.is_input_fault());
    }

    #[test]
    fn test_capability_error_debug() {
        let err = CapabilityError::NotFound("x".to_string());
        assert!(format!("{:?}", err).contains("NotFound"));
    }
}
