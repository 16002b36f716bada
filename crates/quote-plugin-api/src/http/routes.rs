//! HTTP route definitions.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::http::handlers::{health, method_not_allowed, run_capability};
use crate::state::AppState;

/// Create the plugin router.
///
/// ```text
/// GET  /health  - Liveness probe
/// POST /run     - Invoke a capability
/// ```
///
/// Every other method on either path, `HEAD` included, gets `405` with an
/// empty body; unknown paths get `404`. Oversized `/run` bodies are answered
/// with the `500` failure envelope.
pub fn create_router(state: Arc<AppState>) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_body_bytes);

    Router::new()
        .route("/health", get(health).head(method_not_allowed))
        .route("/run", post(run_capability))
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
