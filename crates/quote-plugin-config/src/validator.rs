//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Collapse all errors into a single [`ConfigError::Invalid`].
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        if self.is_valid() {
            return Ok(self.warnings);
        }
        let message = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.path, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        Err(ConfigError::Invalid(message))
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_server(config, &mut result);
        Self::validate_plugin(config, &mut result);
        Self::validate_core(config, &mut result);

        result
    }

    fn validate_server(config: &Config, result: &mut ValidationResult) {
        if config.server.port == 0 {
            result.add_error(ValidationError::new("server.port", "Port cannot be 0"));
        }

        if config.server.host.is_empty() {
            result.add_error(ValidationError::new("server.host", "Host cannot be empty"));
        }

        if config.server.max_body_bytes == 0 {
            result.add_error(ValidationError::new(
                "server.max_body_bytes",
                "max_body_bytes must be greater than 0",
            ));
        }
    }

    fn validate_plugin(config: &Config, result: &mut ValidationResult) {
        if config.plugin.id.trim().is_empty() {
            result.add_error(ValidationError::new("plugin.id", "Plugin id cannot be empty"));
        }

        if !is_http_url(&config.plugin.base_url) {
            result.add_error(ValidationError::new(
                "plugin.base_url",
                "base_url must start with http:// or https://",
            ));
        }

        if config.plugin.description.trim().is_empty() {
            result.add_warning(ValidationWarning::new(
                "plugin.description",
                "Empty description; the Core relies on it to route requests",
            ));
        }
    }

    fn validate_core(config: &Config, result: &mut ValidationResult) {
        if !is_http_url(&config.core.url) {
            result.add_error(ValidationError::new(
                "core.url",
                "url must start with http:// or https://",
            ));
        }

        if config.core.timeout_secs == 0 {
            result.add_error(ValidationError::new(
                "core.timeout_secs",
                "timeout_secs must be greater than 0",
            ));
        }
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
