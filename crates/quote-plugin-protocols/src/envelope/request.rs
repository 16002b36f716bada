//! Inbound invocation request.

use serde_json::Value;

use crate::capability::CapabilityParameters;
use crate::error::EnvelopeError;

/// Raw invocation request as sent by the Core.
///
/// Decoding is lenient: every field is optional and defaults are applied by
/// the dispatcher, not here. `null` is treated the same as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvocationRequest {
    /// Opaque correlation token, empty if absent.
    pub request_id: String,

    /// Plugin identifier, `None` if absent or empty.
    pub plugin_id: Option<String>,

    /// Raw (not yet normalized) capability identifier, `None` if absent or empty.
    pub capability_id: Option<String>,

    /// Capability parameters, empty if absent or not an object.
    pub capability_parameters: CapabilityParameters,
}

impl InvocationRequest {
    /// Decode a request from a parsed JSON document.
    pub fn from_value(value: &Value) -> Result<Self, EnvelopeError> {
        let object = match value {
            Value::Object(object) => object,
            Value::Null => return Err(EnvelopeError::NotAnObject("null")),
            Value::Bool(_) => return Err(EnvelopeError::NotAnObject("boolean")),
            Value::Number(_) => return Err(EnvelopeError::NotAnObject("number")),
            Value::String(_) => return Err(EnvelopeError::NotAnObject("string")),
            Value::Array(_) => return Err(EnvelopeError::NotAnObject("array")),
        };

        let request_id = match object.get("request_id") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        };

        Ok(Self {
            request_id,
            plugin_id: non_empty_str(object.get("plugin_id"), "plugin_id")?,
            capability_id: non_empty_str(object.get("capability_id"), "capability_id")?,
            capability_parameters: CapabilityParameters::from_value(
                object.get("capability_parameters"),
            ),
        })
    }
}

fn non_empty_str(
    value: Option<&Value>,
    field: &'static str,
) -> Result<Option<String>, EnvelopeError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => Ok(Some(v.to_string())),
        Some(_) => Err(EnvelopeError::InvalidField {
            field,
            expected: "a string or scalar",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_request() {
        let value = json!({
            "request_id": "req-42",
            "plugin_id": "quote",
            "capability_id": "Get Quote By Topic",
            "capability_parameters": {"topic": "success"}
        });
        let req = InvocationRequest::from_value(&value).unwrap();
        assert_eq!(req.request_id, "req-42");
        assert_eq!(req.plugin_id.as_deref(), Some("quote"));
        assert_eq!(req.capability_id.as_deref(), Some("Get Quote By Topic"));
        assert_eq!(req.capability_parameters.len(), 1);
    }

    #[test]
    fn test_empty_object() {
        let req = InvocationRequest::from_value(&json!({})).unwrap();
        assert_eq!(req, InvocationRequest::default());
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let value = json!({"plugin_id": "", "capability_id": "", "request_id": null});
        let req = InvocationRequest::from_value(&value).unwrap();
        assert!(req.plugin_id.is_none());
        assert!(req.capability_id.is_none());
        assert_eq!(req.request_id, "");
    }

    #[test]
    fn test_non_string_request_id_is_echoed_as_json_text() {
        let req = InvocationRequest::from_value(&json!({"request_id": 17})).unwrap();
        assert_eq!(req.request_id, "17");
    }

    #[test]
    fn test_parameters_not_object_is_empty() {
        let value = json!({"capability_parameters": ["topic"]});
        let req = InvocationRequest::from_value(&value).unwrap();
        assert!(req.capability_parameters.is_empty());
    }

    #[test]
    fn test_top_level_must_be_object() {
        for (value, kind) in [
            (json!(null), "null"),
            (json!([]), "array"),
            (json!("hi"), "string"),
            (json!(3), "number"),
            (json!(false), "boolean"),
        ] {
            match InvocationRequest::from_value(&value) {
                Err(EnvelopeError::NotAnObject(k)) => assert_eq!(k, kind),
                other => panic!("expected NotAnObject, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_scalar_ids_are_converted_to_text() {
        let value = json!({"plugin_id": 7, "capability_id": true});
        let req = InvocationRequest::from_value(&value).unwrap();
        assert_eq!(req.plugin_id.as_deref(), Some("7"));
        assert_eq!(req.capability_id.as_deref(), Some("true"));
    }

    #[test]
    fn test_array_capability_id_rejected() {
        let err = InvocationRequest::from_value(&json!({"capability_id": ["get_quote"]}))
            .unwrap_err();
        assert!(matches!(
            err,
            EnvelopeError::InvalidField { field: "capability_id", .. }
        ));
    }

    #[test]
    fn test_non_string_plugin_id_rejected() {
        let err = InvocationRequest::from_value(&json!({"plugin_id": {"id": 1}})).unwrap_err();
        assert!(err.to_string().contains("plugin_id"));
    }
}
