//! Server initialization and startup logic for the quote plugin.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use quote_plugin_api::{AppState, InterfaceConfig, InterfaceServer};
use quote_plugin_capability_quote::{GetQuoteCapability, QuoteExtension};
use quote_plugin_config::{Config, ConfigLoader, LoggingConfig};
use quote_plugin_core::{CapabilityRegistry, Dispatcher};
use quote_plugin_protocols::{Extension, ExtensionContext, ExtensionError};

use crate::register::{build_registration, register_and_log};

/// Initialize tracing with console output and, when `logging.dir` is set,
/// a daily rolling log file.
///
/// `RUST_LOG` overrides `logging.level`. Console output goes to stderr so that
/// `manifest` can print clean JSON on stdout.
pub(crate) fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = match &logging.dir {
        Some(dir) => {
            let log_dir = PathBuf::from(ConfigLoader::expand_path(dir));
            std::fs::create_dir_all(&log_dir)?;

            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("quote-plugin")
                .filename_suffix("log")
                .max_log_files(14)
                .build(&log_dir)?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // Worker guard must outlive the subscriber.
            static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
                std::sync::OnceLock::new();
            let _ = GUARD.set(guard);

            Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .try_init()?;

    Ok(())
}

/// Create the capability registry and let the quote extension fill it.
pub(crate) async fn build_registry() -> Result<Arc<CapabilityRegistry>, ExtensionError> {
    let registry = Arc::new(CapabilityRegistry::new(GetQuoteCapability::ID));

    let mut extension = QuoteExtension::new();
    let ctx = ExtensionContext::new(registry.clone());
    extension.initialize(ctx).await?;
    info!(
        extension = %extension.manifest().id,
        capabilities = ?registry.list_ids(),
        "Extension loaded"
    );

    Ok(registry)
}

/// Assemble the shared HTTP state from config and a populated registry.
pub(crate) fn build_state(config: &Config, registry: Arc<CapabilityRegistry>) -> Arc<AppState> {
    let dispatcher = Arc::new(Dispatcher::new(registry, config.plugin.id.clone()));
    Arc::new(AppState::new(dispatcher).with_max_body_bytes(config.server.max_body_bytes))
}

/// Run the server in foreground until Ctrl-C or SIGTERM.
pub(crate) async fn run_server(
    config: Config,
    register: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting quote plugin v{}", env!("CARGO_PKG_VERSION"));

    let registry = build_registry().await?;
    let registration = build_registration(&config, &registry);
    let state = build_state(&config, registry);

    let server = InterfaceServer::new(
        InterfaceConfig::new(config.server.host.clone(), config.server.port),
        state,
    );
    let listener = server.bind().await?;

    if register || config.core.register_on_startup {
        let core_url = config.core.url.clone();
        let timeout_secs = config.core.timeout_secs;
        tokio::spawn(async move {
            register_and_log(&core_url, timeout_secs, registration).await;
        });
    }

    server
        .serve(listener, quote_plugin_api::shutdown_signal())
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_registry_has_quote_capabilities() {
        let registry = build_registry().await.unwrap();
        assert_eq!(registry.default_id(), "get_quote");
        assert_eq!(registry.list_ids(), vec!["get_quote", "get_quote_by_topic"]);
    }

    #[tokio::test]
    async fn test_build_state_uses_config() {
        let mut config = Config::default();
        config.plugin.id = "quotes-eu".to_string();
        config.server.max_body_bytes = 2048;

        let state = build_state(&config, build_registry().await.unwrap());
        assert_eq!(state.default_plugin_id(), "quotes-eu");
        assert_eq!(state.max_body_bytes, 2048);
    }

    #[tokio::test]
    async fn test_state_dispatches_real_quotes() {
        let state = build_state(&Config::default(), build_registry().await.unwrap());
        let body = br#"{"request_id":"r1","capability_id":"get_quote_by_topic","capability_parameters":{"topic":"innovation","style":"short"}}"#;

        let result = state.dispatcher.dispatch(body).await.unwrap();
        assert!(result.success);
        assert_eq!(result.request_id, "r1");
        assert_eq!(result.plugin_id, "quote");
        assert_eq!(
            result.text,
            "\"Innovation distinguishes between a leader and a follower.\" — Steve Jobs"
        );
    }
}
