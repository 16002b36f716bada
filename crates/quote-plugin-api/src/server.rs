//! Interface server implementation.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::error::InterfaceError;
use crate::http::routes::create_router;
use crate::state::AppState;

/// Interface server configuration.
#[derive(Debug, Clone)]
pub struct InterfaceConfig {
    pub host: String,
    pub port: u16,
}

impl InterfaceConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3101,
        }
    }
}

/// The interface server.
pub struct InterfaceServer {
    config: InterfaceConfig,
    state: Arc<AppState>,
}

impl InterfaceServer {
    pub fn new(config: InterfaceConfig, state: Arc<AppState>) -> Self {
        Self { config, state }
    }

    /// Get the server address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Bind the listener without serving yet.
    pub async fn bind(&self) -> Result<TcpListener, InterfaceError> {
        let addr = self.addr();
        let socket_addr: SocketAddr = addr.parse().map_err(|source| InterfaceError::InvalidAddress {
            addr: addr.clone(),
            source,
        })?;
        TcpListener::bind(socket_addr)
            .await
            .map_err(|source| InterfaceError::Bind { addr, source })
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    /// In-flight requests are allowed to complete. Invocation totals are
    /// logged on the way out.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<(), InterfaceError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = create_router(self.state.clone());
        let local = listener.local_addr()?;

        info!("Plugin server listening on {}", local);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;
        info!(
            invocations = self.state.request_count(),
            faults = self.state.fault_count(),
            "Plugin server stopped"
        );

        Ok(())
    }
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
