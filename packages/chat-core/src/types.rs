//! Core data types for the chat session and its wire contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sender label for messages typed by the local user.
pub const SENDER_USER: &str = "You";
/// Sender label for replies from the chat backend.
pub const SENDER_BOT: &str = "Bot";
/// Sender label for notices produced by the session itself.
pub const SENDER_SYSTEM: &str = "System";

// ============================================================================
// Message Types
// ============================================================================

/// A single conversation entry.
///
/// The type-conditional fields live in [`MessageBody`], so an image message
/// always carries image fields and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique id: creation millis plus a random suffix
    pub id: String,
    /// Display label of the author ("You", "Bot", "System" by convention)
    pub sender: String,
    /// Caption, reply text, or system note
    pub content: String,
    /// When the message was created
    pub timestamp: DateTime<Utc>,
    /// Type tag and the fields that belong to it
    #[serde(flatten)]
    pub body: MessageBody,
}

impl Message {
    /// Create a message with a fresh id and the current time.
    pub fn new(body: MessageBody, sender: impl Into<String>, content: impl Into<String>) -> Self {
        let timestamp = Utc::now();
        Self {
            id: next_id(&timestamp),
            sender: sender.into(),
            content: content.into(),
            timestamp,
            body,
        }
    }

    /// The message type tag.
    pub fn kind(&self) -> MessageKind {
        self.body.kind()
    }

    /// Image fields, if this is an image message.
    pub fn image(&self) -> Option<&ImageAttachment> {
        match &self.body {
            MessageBody::Image(image) => Some(image),
            _ => None,
        }
    }

    /// File fields, if this is a file message.
    pub fn file(&self) -> Option<&FileAttachment> {
        match &self.body {
            MessageBody::File(file) => Some(file),
            _ => None,
        }
    }
}

/// Builds `<millis>-<suffix>` so two messages in the same millisecond differ.
fn next_id(timestamp: &DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", timestamp.timestamp_millis(), &suffix[..9])
}

/// Message type tag together with its type-conditional fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessageBody {
    Text,
    Image(ImageAttachment),
    File(FileAttachment),
    System,
}

impl MessageBody {
    pub fn kind(&self) -> MessageKind {
        match self {
            MessageBody::Text => MessageKind::Text,
            MessageBody::Image(_) => MessageKind::Image,
            MessageBody::File(_) => MessageKind::File,
            MessageBody::System => MessageKind::System,
        }
    }
}

/// Message type without its payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Image,
    File,
    System,
}

/// Fields carried by an image message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageAttachment {
    /// Local reference the UI can resolve to the uploaded bytes
    pub image_url: String,
    pub image_width: u32,
    pub image_height: u32,
    pub image_alt: String,
}

/// Fields carried by a generic file message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileAttachment {
    pub file_name: String,
    /// MIME type as reported by the upload surface
    pub file_type: String,
    /// Size in bytes
    pub file_size: u64,
}

// ============================================================================
// Chat API Types
// ============================================================================

/// Kind of chat request sent to the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRequestType {
    Text,
    File,
    Image,
}

/// Request body for `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(rename = "type")]
    pub kind: ChatRequestType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_info: Option<FileInfo>,
}

impl ChatRequest {
    /// Create a text request.
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            kind: ChatRequestType::Text,
            message: Some(message.into()),
            file_info: None,
        }
    }

    /// Create a file or image request.
    pub fn file(kind: ChatRequestType, file_info: FileInfo) -> Self {
        Self {
            kind,
            message: None,
            file_info: Some(file_info),
        }
    }
}

/// Upload metadata sent along with a file or image request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FileInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// Response body from `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub response: String,
}

/// Error body returned by the proxy route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProxyError {
    pub error: String,
}

impl ProxyError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
