//! Ordered, append-only conversation log.

use crate::types::{Message, MessageBody, SENDER_BOT, SENDER_SYSTEM};

/// Greeting placed at the top of every fresh conversation.
pub const GREETING: &str = "Hello, how can I help you today?";

/// Message store for a single chat session.
///
/// Entries are only ever appended or replaced wholesale by
/// [`reset_messages`](MessageStore::reset_messages).
#[derive(Debug, Clone)]
pub struct MessageStore {
    messages: Vec<Message>,
}

impl MessageStore {
    /// Create a store seeded with the greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![Self::greeting()],
        }
    }

    /// Create a store with no entries at all.
    pub fn empty() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    fn greeting() -> Message {
        Message::new(MessageBody::Text, SENDER_BOT, GREETING)
    }

    /// Build a message with a fresh id and timestamp.
    ///
    /// The message is not appended; pass it to [`add_message`](Self::add_message).
    pub fn create_message(
        &self,
        body: MessageBody,
        sender: impl Into<String>,
        content: impl Into<String>,
    ) -> Message {
        Message::new(body, sender, content)
    }

    /// Build a system notice.
    pub fn create_error_message(&self, content: impl Into<String>) -> Message {
        Message::new(MessageBody::System, SENDER_SYSTEM, content)
    }

    /// Append a message to the end of the log.
    pub fn add_message(&mut self, message: Message) {
        tracing::trace!(id = %message.id, kind = ?message.kind(), "Appending message");
        self.messages.push(message);
    }

    /// Replace the whole log with a single fresh greeting.
    pub fn reset_messages(&mut self) {
        self.messages = vec![Self::greeting()];
    }

    /// All messages in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Most recently appended message.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}
