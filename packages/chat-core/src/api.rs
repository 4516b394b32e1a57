//! Remote chat API
//!
//! The session talks to the backend only through [`ChatApi`]; [`HttpChatClient`]
//! is the implementation used against the proxy route.

pub mod client;

pub use client::*;

use std::future::Future;
use std::sync::Arc;

use crate::types::{ChatRequest, ChatResponse};
use crate::Result;

/// A single request/response exchange with the chat backend.
pub trait ChatApi: Send + Sync {
    /// Send one request. Network failures, non-2xx statuses and malformed
    /// bodies all surface as `Err`.
    fn send_chat(&self, request: ChatRequest) -> impl Future<Output = Result<ChatResponse>> + Send;
}

impl<T: ChatApi> ChatApi for Arc<T> {
    fn send_chat(&self, request: ChatRequest) -> impl Future<Output = Result<ChatResponse>> + Send {
        (**self).send_chat(request)
    }
}
