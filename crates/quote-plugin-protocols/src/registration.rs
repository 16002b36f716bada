//! Plugin registration descriptor and the Core's acknowledgements.
//!
//! The descriptor is what an external HTTP plugin sends to the Core's
//! `POST /api/plugins/register` so the Core knows where to reach it and
//! which capabilities it can invoke.

use serde::{Deserialize, Serialize};

use crate::capability::CapabilityDefinition;

/// How the Core reaches the plugin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Base URL of the plugin, e.g. `http://127.0.0.1:3101`.
    pub base_url: String,

    /// Invocation path relative to `base_url`, without a leading slash.
    pub path: String,

    /// Per-invocation timeout the Core should apply.
    pub timeout_sec: u64,
}

/// Registration descriptor for an external plugin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginRegistration {
    pub plugin_id: String,
    pub name: String,
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_long: Option<String>,

    pub health_check_url: String,

    /// Plugin transport type; always `http` for this plugin.
    #[serde(rename = "type")]
    pub plugin_type: String,

    pub config: TransportConfig,

    pub capabilities: Vec<CapabilityDefinition>,
}

impl PluginRegistration {
    /// Capability ids advertised by this registration.
    pub fn capability_ids(&self) -> Vec<&str> {
        self.capabilities.iter().map(|c| c.id.as_str()).collect()
    }
}

/// Core response to a registration request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationAck {
    #[serde(default)]
    pub plugin_id: Option<String>,

    #[serde(default)]
    pub registered: bool,

    /// Failure detail reported by the Core.
    #[serde(default)]
    pub detail: Option<String>,
}

/// Core response to an unregistration request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UnregistrationAck {
    #[serde(default)]
    pub plugin_id: Option<String>,

    #[serde(default)]
    pub removed: bool,

    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PluginRegistration {
        PluginRegistration {
            plugin_id: "quote".to_string(),
            name: "Quote Plugin".to_string(),
            description: "Quotes".to_string(),
            description_long: None,
            health_check_url: "http://127.0.0.1:3101/health".to_string(),
            plugin_type: "http".to_string(),
            config: TransportConfig {
                base_url: "http://127.0.0.1:3101".to_string(),
                path: "run".to_string(),
                timeout_sec: 10,
            },
            capabilities: vec![CapabilityDefinition::new("get_quote", "Get", "Random quote")],
        }
    }

    #[test]
    fn test_registration_wire_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["type"], "http");
        assert_eq!(json["config"]["path"], "run");
        assert_eq!(json["config"]["timeout_sec"], 10);
        assert_eq!(json["capabilities"][0]["id"], "get_quote");
        assert!(json.get("description_long").is_none());
    }

    #[test]
    fn test_capability_ids() {
        assert_eq!(sample().capability_ids(), vec!["get_quote"]);
    }

    #[test]
    fn test_registration_ack_success() {
        let ack: RegistrationAck =
            serde_json::from_str(r#"{"plugin_id":"quote","registered":true}"#).unwrap();
        assert!(ack.registered);
        assert_eq!(ack.plugin_id.as_deref(), Some("quote"));
    }

    #[test]
    fn test_registration_ack_failure_detail() {
        let ack: RegistrationAck =
            serde_json::from_str(r#"{"detail":"bad url","registered":false}"#).unwrap();
        assert!(!ack.registered);
        assert_eq!(ack.detail.as_deref(), Some("bad url"));
    }

    #[test]
    fn test_unregistration_ack_defaults() {
        let ack: UnregistrationAck = serde_json::from_str("{}").unwrap();
        assert!(!ack.removed);
        assert!(ack.plugin_id.is_none());
    }
}
