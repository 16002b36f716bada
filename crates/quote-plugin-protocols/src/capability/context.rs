//! Capability execution context, parameters and output.

use serde_json::{Map, Value};

use crate::error::CapabilityError;
use crate::types::Metadata;

/// Context for one capability execution.
#[derive(Debug, Clone, Default)]
pub struct CapabilityContext {
    /// Correlation token echoed back to the Core.
    pub request_id: String,

    /// Plugin identifier the Core addressed.
    pub plugin_id: String,

    /// Normalized capability identifier the Core asked for.
    pub capability_id: String,
}

impl CapabilityContext {
    /// Create a new capability context.
    pub fn new(
        request_id: impl Into<String>,
        plugin_id: impl Into<String>,
        capability_id: impl Into<String>,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            plugin_id: plugin_id.into(),
            capability_id: capability_id.into(),
        }
    }
}

/// Parameters passed to a capability.
///
/// Anything other than a JSON object is treated as an empty parameter set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapabilityParameters {
    values: Map<String, Value>,
}

impl CapabilityParameters {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build parameters from an optional JSON value.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Object(map)) => Self { values: map.clone() },
            _ => Self::default(),
        }
    }

    /// Get a raw parameter value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Read an optional string parameter, trimmed.
    ///
    /// Absent, `null` and blank values yield `None`. Numbers and booleans are
    /// read as their JSON text; arrays and objects are rejected.
    pub fn optional_str(&self, name: &str) -> Result<Option<String>, CapabilityError> {
        match self.values.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => {
                let trimmed = s.trim();
                Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
            }
            Some(v @ (Value::Number(_) | Value::Bool(_))) => Ok(Some(v.to_string())),
            Some(other) => Err(CapabilityError::InvalidParameters(format!(
                "'{}' must be a string, got {}",
                name,
                json_type_name(other)
            ))),
        }
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no parameters were supplied.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Map<String, Value>> for CapabilityParameters {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Output produced by a successful capability execution.
#[derive(Debug, Clone, Default)]
pub struct CapabilityOutput {
    /// Text delivered to the Core.
    pub text: String,

    /// Additional metadata (reserved).
    pub metadata: Metadata,
}

impl CapabilityOutput {
    /// Create an output carrying only text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metadata: Metadata::new(),
        }
    }
}
