//! Capability definition types.

use serde::{Deserialize, Serialize};

/// One parameter accepted by a capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityParam {
    /// Parameter name as it appears in `capability_parameters`.
    pub name: String,

    /// JSON type name (string, number, boolean, object, array).
    #[serde(rename = "type")]
    pub param_type: String,

    /// Whether the Core must supply this parameter.
    pub required: bool,

    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CapabilityParam {
    /// Create an optional string parameter.
    pub fn string(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: "string".to_string(),
            required: false,
            description: None,
        }
    }

    /// Mark the parameter as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Definition of a capability, as advertised to the Core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapabilityDefinition {
    /// Normalized capability identifier (lookup key).
    pub id: String,

    /// Human-readable name.
    pub name: String,

    /// Description of what the capability does.
    pub description: String,

    /// Accepted parameters.
    #[serde(default)]
    pub parameters: Vec<CapabilityParam>,

    /// Description of the produced output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_description: Option<String>,

    /// Whether the Core should post-process the output before delivery.
    #[serde(default)]
    pub post_process: bool,

    /// Prompt the Core uses when post-processing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_process_prompt: Option<String>,

    /// HTTP method the Core uses to invoke the capability.
    pub method: String,

    /// Path the Core invokes, relative to the plugin's base URL.
    pub path: String,
}

impl CapabilityDefinition {
    /// Create a new capability definition invoked via `POST /run`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
            output_description: None,
            post_process: false,
            post_process_prompt: None,
            method: "POST".to_string(),
            path: "/run".to_string(),
        }
    }

    /// Add a parameter.
    pub fn with_parameter(mut self, param: CapabilityParam) -> Self {
        self.parameters.push(param);
        self
    }

    /// Set the output description.
    pub fn with_output_description(mut self, description: impl Into<String>) -> Self {
        self.output_description = Some(description.into());
        self
    }

    /// Ask the Core to post-process the output with the given prompt.
    pub fn with_post_process(mut self, prompt: impl Into<String>) -> Self {
        self.post_process = true;
        self.post_process_prompt = Some(prompt.into());
        self
    }

    /// Look up a declared parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&CapabilityParam> {
        self.parameters.iter().find(|p| p.name == name)
    }
}
