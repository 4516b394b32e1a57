//! HTTP routes served by the proxy.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chat_core::ProxyError;
use serde_json::{json, Value};

use crate::upstream::Upstream;

#[derive(Debug, Clone)]
struct AppState {
    upstream: Upstream,
}

/// `POST /api/chat` and `GET /api/health`.
pub fn router(upstream: Upstream) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/api/health", get(health))
        .with_state(AppState { upstream })
}

async fn chat(State(state): State<AppState>, body: Bytes) -> Response {
    let payload: Value = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::warn!("Rejecting chat request with invalid JSON: {}", err);
            return error_response(StatusCode::BAD_REQUEST, "Invalid JSON body");
        }
    };

    match state.upstream.forward_chat(&payload).await {
        Ok(reply) => Json(reply).into_response(),
        Err(err) => {
            tracing::error!("Error forwarding request to backend: {}", err);
            error_response(err.status(), err.client_message())
        }
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ProxyError::new(message))).into_response()
}
