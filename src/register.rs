//! Registration with the Core orchestrator.
//!
//! The Core keeps a table of external plugins. A plugin announces itself
//! with a [`PluginRegistration`] and is removed again by id.

use std::time::Duration;

use reqwest::Client;
use serde_json::json;
use thiserror::Error;
use tracing::{error, info};

use quote_plugin_config::Config;
use quote_plugin_core::CapabilityRegistry;
use quote_plugin_protocols::{
    PluginRegistration, RegistrationAck, TransportConfig, UnregistrationAck,
};

/// Invocation path advertised to the Core, relative to the base URL.
const RUN_PATH: &str = "run";

/// Errors talking to the Core.
#[derive(Debug, Error)]
pub(crate) enum RegistrationError {
    #[error("Core request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Core rejected {action} (HTTP {status}): {detail}")]
    Rejected {
        action: &'static str,
        status: u16,
        detail: String,
    },
}

/// Build the descriptor the Core expects from the plugin config and the
/// capabilities actually registered.
pub(crate) fn build_registration(
    config: &Config,
    registry: &CapabilityRegistry,
) -> PluginRegistration {
    let base_url = config.plugin.base_url_trimmed().to_string();

    PluginRegistration {
        plugin_id: config.plugin.id.clone(),
        name: config.plugin.name.clone(),
        description: config.plugin.description.clone(),
        description_long: config.plugin.description_long.clone(),
        health_check_url: format!("{}/health", base_url),
        plugin_type: "http".to_string(),
        config: TransportConfig {
            base_url,
            path: RUN_PATH.to_string(),
            timeout_sec: config.core.timeout_secs,
        },
        capabilities: registry.list(),
    }
}

/// HTTP client for the Core's plugin table.
pub(crate) struct CoreClient {
    client: Client,
    base_url: String,
}

impl CoreClient {
    pub(crate) fn new(base_url: &str, timeout_secs: u64) -> Result<Self, RegistrationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `POST /api/plugins/register`. Succeeds only on 200 with `registered: true`.
    pub(crate) async fn register(
        &self,
        registration: &PluginRegistration,
    ) -> Result<RegistrationAck, RegistrationError> {
        let url = format!("{}/api/plugins/register", self.base_url);
        let response = self.client.post(&url).json(registration).send().await?;

        let status = response.status();
        let body = response.text().await?;
        let ack: RegistrationAck = serde_json::from_str(&body).unwrap_or_default();

        if status.as_u16() != 200 || !ack.registered {
            return Err(RegistrationError::Rejected {
                action: "registration",
                status: status.as_u16(),
                detail: ack.detail.unwrap_or(body),
            });
        }

        Ok(ack)
    }

    /// `POST /api/plugins/unregister`. Returns whether the Core had the plugin.
    pub(crate) async fn unregister(&self, plugin_id: &str) -> Result<bool, RegistrationError> {
        let url = format!("{}/api/plugins/unregister", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&json!({ "plugin_id": plugin_id }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.as_u16() != 200 {
            let detail = serde_json::from_str::<UnregistrationAck>(&body)
                .ok()
                .and_then(|ack| ack.detail)
                .unwrap_or(body);
            return Err(RegistrationError::Rejected {
                action: "unregistration",
                status: status.as_u16(),
                detail,
            });
        }

        let ack: UnregistrationAck = serde_json::from_str(&body).unwrap_or_default();
        Ok(ack.removed)
    }
}

/// Register and log the outcome. Used after the listener is up, where a
/// failure must not take the server down.
pub(crate) async fn register_and_log(
    core_url: &str,
    timeout_secs: u64,
    registration: PluginRegistration,
) {
    let result = match CoreClient::new(core_url, timeout_secs) {
        Ok(client) => client.register(&registration).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(_) => info!(
            plugin_id = %registration.plugin_id,
            capabilities = ?registration.capability_ids(),
            "Registered with Core at {}",
            core_url
        ),
        Err(e) => error!(
            plugin_id = %registration.plugin_id,
            "Registration with Core failed: {}",
            e
        ),
    }
}
