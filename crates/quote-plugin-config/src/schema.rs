//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub plugin: PluginConfig,

    #[serde(default)]
    pub core: CoreConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Largest accepted `/run` body.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3101
}

fn default_max_body_bytes() -> usize {
    64 * 1024
}

/// Identity the plugin advertises to the Core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Plugin id used when a request omits `plugin_id`.
    #[serde(default = "default_plugin_id")]
    pub id: String,

    #[serde(default = "default_plugin_name")]
    pub name: String,

    #[serde(default = "default_plugin_description")]
    pub description: String,

    #[serde(default = "default_plugin_description_long")]
    pub description_long: Option<String>,

    /// Address the Core uses to reach this plugin.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            id: default_plugin_id(),
            name: default_plugin_name(),
            description: default_plugin_description(),
            description_long: default_plugin_description_long(),
            base_url: default_base_url(),
        }
    }
}

impl PluginConfig {
    /// Base URL without a trailing slash.
    pub fn base_url_trimmed(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

fn default_plugin_id() -> String {
    "quote".to_string()
}

fn default_plugin_name() -> String {
    "Quote Plugin".to_string()
}

fn default_plugin_description() -> String {
    "Get a random inspirational quote, or by topic. Use when the user asks for a quote, \
     motivation, or inspiration."
        .to_string()
}

fn default_plugin_description_long() -> Option<String> {
    Some(
        "Returns random quotes; optional topic (motivation, success, dreams, etc.) and style \
         (short/long). Use for: give me a quote, inspire me, quote about success."
            .to_string(),
    )
}

fn default_base_url() -> String {
    "http://127.0.0.1:3101".to_string()
}

/// Where the Core orchestrator lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    #[serde(default = "default_core_url")]
    pub url: String,

    /// Register with the Core once the listener is up.
    #[serde(default)]
    pub register_on_startup: bool,

    /// Timeout for calls to the Core, also advertised as the invocation timeout.
    #[serde(default = "default_core_timeout")]
    pub timeout_secs: u64,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            url: default_core_url(),
            register_on_startup: false,
            timeout_secs: default_core_timeout(),
        }
    }
}

fn default_core_url() -> String {
    "http://127.0.0.1:9000".to_string()
}

fn default_core_timeout() -> u64 {
    10
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for daily rolling log files. Console only when unset.
    #[serde(default)]
    pub dir: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
