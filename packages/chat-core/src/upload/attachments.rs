//! Session-local references to uploaded bytes.

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

/// Prefix of every reference handed out by [`AttachmentStore`].
pub const BLOB_SCHEME: &str = "blob:chat/";

/// Uploaded bytes kept for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub mime_type: String,
    pub bytes: Arc<[u8]>,
}

/// In-memory map from `blob:` references to uploads.
///
/// Lives as long as the chat session; nothing is written to disk.
#[derive(Debug, Default)]
pub struct AttachmentStore {
    entries: HashMap<String, Attachment>,
}

impl AttachmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register bytes and return the reference to put in an image message.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Arc<[u8]>,
    ) -> String {
        let url = format!("{}{}", BLOB_SCHEME, Uuid::new_v4());
        self.entries.insert(
            url.clone(),
            Attachment {
                name: name.into(),
                mime_type: mime_type.into(),
                bytes,
            },
        );
        url
    }

    pub fn get(&self, url: &str) -> Option<&Attachment> {
        self.entries.get(url)
    }

    /// Drop a single reference. Returns whether it existed.
    pub fn revoke(&mut self, url: &str) -> bool {
        self.entries.remove(url).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
