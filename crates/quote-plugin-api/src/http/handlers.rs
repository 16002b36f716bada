//! Plugin endpoint handlers.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use quote_plugin_protocols::InvocationResult;

use crate::state::AppState;

/// Liveness response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// `GET /health`. Always 200 while the process is serving.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Explicit `405` for methods axum would otherwise derive from `GET`.
pub async fn method_not_allowed() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}

/// `POST /run`.
///
/// The body is read as raw bytes so that malformed JSON and wrong content
/// types reach the dispatcher instead of being rejected by an extractor.
/// A body that cannot be buffered (over the size limit) is a fault like any
/// other and still gets a JSON envelope.
/// Dispatch runs on its own task; a panicking capability surfaces as a
/// `JoinError` and is answered like any other fault.
pub async fn run_capability(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    state.increment_requests();

    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!(status = %rejection.status(), "Invocation body rejected");
            return fault_response(&state, rejection.body_text());
        }
    };

    let dispatcher = state.dispatcher.clone();
    let outcome = tokio::spawn(async move { dispatcher.dispatch(&body).await }).await;

    match outcome {
        Ok(Ok(result)) => (StatusCode::OK, Json(result)).into_response(),
        Ok(Err(err)) => {
            warn!(error = %err, "Invocation failed");
            fault_response(&state, err.to_string())
        }
        Err(join_err) => {
            let message = panic_message(join_err);
            error!(error = %message, "Capability task aborted");
            fault_response(&state, message)
        }
    }
}

/// 500 with a failure envelope. The request id is not trusted at this point,
/// so it is left empty.
fn fault_response(state: &AppState, message: String) -> Response {
    state.increment_faults();
    let envelope = InvocationResult::failure("", state.default_plugin_id(), message);
    (StatusCode::INTERNAL_SERVER_ERROR, Json(envelope)).into_response()
}

fn panic_message(err: tokio::task::JoinError) -> String {
    if !err.is_panic() {
        return err.to_string();
    }
    let payload = err.into_panic();
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("Capability panicked: {}", msg)
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("Capability panicked: {}", msg)
    } else {
        "Capability panicked".to_string()
    }
}
