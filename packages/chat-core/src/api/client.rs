//! HTTP client for the chat proxy route

use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

use super::ChatApi;
use crate::config::ClientConfig;
use crate::types::{ChatRequest, ChatResponse, ProxyError};
use crate::{Error, Result};

/// Path of the chat endpoint, relative to the base URL.
pub const CHAT_PATH: &str = "/api/chat";
/// Path of the health endpoint, relative to the base URL.
pub const HEALTH_PATH: &str = "/api/health";

/// HTTP client for `POST /api/chat`
#[derive(Debug, Clone)]
pub struct HttpChatClient {
    base_url: String,
    client: Client,
}

impl HttpChatClient {
    /// Create a new client with the given base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a client with timeouts from `config`
    pub fn with_config(base_url: &str, config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a POST request
    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Send a chat request
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        self.post(CHAT_PATH, request).await
    }

    /// Check if the proxy is reachable and healthy
    pub async fn health(&self) -> Result<bool> {
        match self
            .client
            .get(format!("{}{}", self.base_url, HEALTH_PATH))
            .send()
            .await
        {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }
}

impl ChatApi for HttpChatClient {
    async fn send_chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        self.chat(&request).await
    }
}

/// Prefer the proxy's `{error}` payload, then the raw body, then the status text.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ProxyError>(body) {
        return payload.error;
    }
    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    status.canonical_reason().unwrap_or("Unknown error").to_string()
}
