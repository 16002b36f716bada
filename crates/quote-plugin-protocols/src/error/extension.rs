//! Extension-related errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtensionError {
    #[error("Extension not found: {0}")]
    NotFound(String),

    #[error("Capability already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Extension initialization failed: {0}")]
    InitializationFailed(String),

    #[error("{0}")]
    Custom(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = ExtensionError::NotFound("capability-quote".to_string());
        let display = err.to_string();
        assert!(display.contains("not found"));
        assert!(display.contains("capability-quote"));
    }

    #[test]
    fn test_already_registered_error() {
        let err = ExtensionError::AlreadyRegistered("get_quote".to_string());
        assert!(err.to_string().contains("already registered"));
    }

    #[test]
    fn test_initialization_failed_error() {
        let err = ExtensionError::InitializationFailed("no quotes".to_string());
        assert!(err.to_string().contains("initialization failed"));
    }

    #[test]
    fn test_custom_error_is_verbatim() {
        let err = ExtensionError::Custom("something odd".to_string());
        assert_eq!(err.to_string(), "something odd");
    }
}
