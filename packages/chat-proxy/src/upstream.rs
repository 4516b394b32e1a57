//! Forwarding to the chat backend.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;

/// Why a forwarded request did not produce a usable reply.
#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    /// The backend answered with a non-2xx status
    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    /// No response at all (connect failure, timeout, reset)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// 2xx, but the body was not JSON
    #[error("Invalid response from backend")]
    InvalidBody,
}

impl ForwardError {
    /// Status to answer the client with; mirrors the backend when it gave one.
    pub fn status(&self) -> StatusCode {
        match self {
            ForwardError::Status { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            ForwardError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ForwardError::InvalidBody => StatusCode::BAD_GATEWAY,
        }
    }

    /// Text for the `{error}` payload.
    pub fn client_message(&self) -> String {
        match self {
            ForwardError::Status { message, .. } => message.clone(),
            ForwardError::Transport(err) => err.to_string(),
            ForwardError::InvalidBody => "Invalid response from backend".to_string(),
        }
    }
}

/// Client for the backend's `/api/chat`.
#[derive(Debug, Clone)]
pub struct Upstream {
    base_url: String,
    client: Client,
}

impl Upstream {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> reqwest::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST `body` unchanged and return the backend's JSON reply.
    pub async fn forward_chat(&self, body: &Value) -> Result<Value, ForwardError> {
        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ForwardError::Status {
                status: status.as_u16(),
                message: upstream_message(status, &body),
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|_| ForwardError::InvalidBody)
    }
}

/// The backend's own `message` field when it sent one.
fn upstream_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("message")?.as_str().map(str::to_string))
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()))
}
