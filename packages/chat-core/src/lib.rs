//! Chat Core - Message state and request orchestration for the chat front-end.
//!
//! This crate provides everything a chat UI needs apart from rendering:
//!
//! - **Messages**: Typed conversation entries and an append-only store
//! - **Uploads**: File validation, image dimension probing, local attachment references
//! - **API client**: The `ChatApi` seam and its HTTP implementation
//! - **Session**: The controller that sequences local echo with the remote round-trip
//!
//! # Example
//!
//! ```rust,no_run
//! use chat_core::{ChatConfig, ChatSession, HttpChatClient};
//!
//! # async fn run() {
//! let client = HttpChatClient::new("http://localhost:3000");
//! let session = ChatSession::new(client, ChatConfig::default());
//!
//! session.send_text("hi").await;
//! for message in session.messages() {
//!     println!("{}: {}", message.sender, message.content);
//! }
//! # }
//! ```

pub mod api;
pub mod config;
pub mod session;
pub mod store;
pub mod types;
pub mod upload;

// Re-export commonly used types
pub use types::{
    ChatRequest, ChatRequestType, ChatResponse, FileAttachment, FileInfo, ImageAttachment,
    Message, MessageBody, MessageKind, ProxyError, SENDER_BOT, SENDER_SYSTEM, SENDER_USER,
};

// Re-export main functionality
pub use api::{ChatApi, HttpChatClient};
pub use config::{ChatConfig, ClientConfig};
pub use session::{ChatSession, FileUpload, Phase, SubmitOutcome};
pub use store::{MessageStore, GREETING};
pub use upload::{
    classify, fit_within, validate_file, Attachment, AttachmentStore, DisplayBounds,
    FileCandidate, FileKind, ImageDimensions, ImageMetadataResolver, ImageSource, UploadPolicy,
    ValidationResult,
};

/// Error types for chat-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request failed: {status} {message}")]
    Status { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Background task failed: {0}")]
    Task(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for chat-core operations.
pub type Result<T> = std::result::Result<T, Error>;
