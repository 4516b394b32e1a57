//! Chat session controller.
//!
//! [`ChatSession`] is the single owner of a conversation's state. Every
//! submission follows the same two steps: append a local echo right away,
//! then append the backend's reply (or a system note) once the request
//! settles. Appends from concurrent submissions land in completion order.
//!
//! A [`reset`](ChatSession::reset) advances the session generation; replies
//! that settle afterwards for requests issued before it are dropped.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::api::ChatApi;
use crate::config::ChatConfig;
use crate::store::MessageStore;
use crate::types::{
    ChatRequest, ChatRequestType, FileAttachment, FileInfo, ImageAttachment, Message, MessageBody,
    SENDER_BOT, SENDER_USER,
};
use crate::upload::{
    classify, Attachment, AttachmentStore, FileCandidate, FileKind, ImageMetadataResolver,
    ImageSource,
};

/// System note appended when a text submission fails.
pub const TEXT_FAILURE_NOTE: &str = "Failed to send message. Please try again.";
/// System note appended when a file submission fails.
pub const FILE_FAILURE_NOTE: &str = "Failed to process file. Please try again.";
/// Caption of the local echo for an image upload.
pub const IMAGE_CAPTION: &str = "Sent an image";

/// Whether any submission is waiting on the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Pending,
}

/// How a submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty input; nothing was appended or sent
    Ignored,
    /// The upload failed validation; a system note was appended
    Rejected,
    /// The backend replied and the reply was appended
    Replied,
    /// The request failed; a system note was appended
    Failed,
    /// The session was reset before the submission settled
    Stale,
}

/// A single file picked by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl FileUpload {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            data,
        }
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn candidate(&self) -> FileCandidate {
        FileCandidate::new(&self.name, self.size(), &self.mime_type)
    }
}

#[derive(Debug)]
struct SessionState {
    store: MessageStore,
    attachments: AttachmentStore,
    generation: u64,
    in_flight: usize,
    last_error: Option<String>,
}

/// Marks one request as in flight until dropped.
struct PendingGuard<'a> {
    state: &'a Mutex<SessionState>,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.in_flight = state.in_flight.saturating_sub(1);
    }
}

/// Conversation state plus the orchestration of text and file submissions.
///
/// Share it between tasks with an `Arc`; the internal lock is only held for
/// the duration of a single append or reset.
pub struct ChatSession<C> {
    api: C,
    config: ChatConfig,
    resolver: ImageMetadataResolver,
    state: Mutex<SessionState>,
}

impl<C: ChatApi> ChatSession<C> {
    /// Start a session seeded with the greeting.
    pub fn new(api: C, config: ChatConfig) -> Self {
        let resolver = ImageMetadataResolver::new(config.display);
        Self {
            api,
            config,
            resolver,
            state: Mutex::new(SessionState {
                store: MessageStore::new(),
                attachments: AttachmentStore::new(),
                generation: 0,
                in_flight: 0,
                last_error: None,
            }),
        }
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    pub fn api(&self) -> &C {
        &self.api
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the conversation in display order.
    pub fn messages(&self) -> Vec<Message> {
        self.state().store.messages().to_vec()
    }

    pub fn message_count(&self) -> usize {
        self.state().store.len()
    }

    pub fn phase(&self) -> Phase {
        if self.state().in_flight > 0 {
            Phase::Pending
        } else {
            Phase::Idle
        }
    }

    pub fn is_pending(&self) -> bool {
        self.phase() == Phase::Pending
    }

    /// Detail of the most recent failed request, for diagnostics only.
    pub fn last_error(&self) -> Option<String> {
        self.state().last_error.clone()
    }

    /// Look up the bytes behind an image message's `image_url`.
    pub fn attachment(&self, url: &str) -> Option<Attachment> {
        self.state().attachments.get(url).cloned()
    }

    /// Clear the conversation back to the greeting.
    ///
    /// Requests still in flight keep running, but their results are discarded.
    pub fn reset(&self) {
        let mut state = self.state();
        state.store.reset_messages();
        state.attachments.clear();
        state.last_error = None;
        state.generation += 1;
        tracing::info!(generation = state.generation, "Chat session reset");
    }

    /// Submit typed text.
    pub async fn send_text(&self, input: &str) -> SubmitOutcome {
        if input.trim().is_empty() {
            return SubmitOutcome::Ignored;
        }

        let generation = self.generation();
        let Some(guard) = self.echo(generation, |state| {
            state
                .store
                .create_message(MessageBody::Text, SENDER_USER, input)
        }) else {
            return SubmitOutcome::Stale;
        };

        self.settle(ChatRequest::text(input), generation, TEXT_FAILURE_NOTE, guard)
            .await
    }

    /// Submit a single file.
    pub async fn send_file(&self, upload: FileUpload) -> SubmitOutcome {
        let candidate = upload.candidate();
        let validation = self.config.upload.validate(&candidate);
        if !validation.is_valid {
            let note = validation
                .error_message
                .unwrap_or_else(|| "Invalid file".to_string());
            tracing::info!(file = %candidate.name, size = candidate.size, "Upload rejected: {}", note);

            let mut state = self.state();
            let message = state.store.create_error_message(note);
            state.store.add_message(message);
            return SubmitOutcome::Rejected;
        }

        let generation = self.generation();
        let FileUpload {
            name,
            mime_type,
            data,
        } = upload;
        let size = candidate.size;

        match classify(&mime_type) {
            FileKind::Image => {
                let bytes: Arc<[u8]> = data.into();
                let dimensions = match self.resolver.resolve(ImageSource::new(bytes.clone())).await {
                    Ok(dimensions) => dimensions,
                    Err(err) => {
                        tracing::warn!(file = %name, "Error getting image dimensions: {}", err);
                        self.config.fallback_image
                    }
                };

                let request = ChatRequest::file(
                    ChatRequestType::Image,
                    FileInfo {
                        name: Some(name.clone()),
                        mime_type: Some(mime_type.clone()),
                        size: Some(size),
                        width: Some(dimensions.width),
                        height: Some(dimensions.height),
                    },
                );

                let Some(guard) = self.echo(generation, |state| {
                    let image_url = state.attachments.register(&name, &mime_type, bytes);
                    state.store.create_message(
                        MessageBody::Image(ImageAttachment {
                            image_url,
                            image_width: dimensions.width,
                            image_height: dimensions.height,
                            image_alt: name.clone(),
                        }),
                        SENDER_USER,
                        IMAGE_CAPTION,
                    )
                }) else {
                    tracing::debug!(file = %name, "Session reset while reading image; dropping upload");
                    return SubmitOutcome::Stale;
                };

                self.settle(request, generation, FILE_FAILURE_NOTE, guard).await
            }
            FileKind::File => {
                let request = ChatRequest::file(
                    ChatRequestType::File,
                    FileInfo {
                        name: Some(name.clone()),
                        mime_type: Some(mime_type.clone()),
                        size: Some(size),
                        width: None,
                        height: None,
                    },
                );

                let Some(guard) = self.echo(generation, |state| {
                    state.store.create_message(
                        MessageBody::File(FileAttachment {
                            file_name: name.clone(),
                            file_type: mime_type.clone(),
                            file_size: size,
                        }),
                        SENDER_USER,
                        format!("Sent a file: {}", name),
                    )
                }) else {
                    return SubmitOutcome::Stale;
                };

                self.settle(request, generation, FILE_FAILURE_NOTE, guard).await
            }
        }
    }

    fn generation(&self) -> u64 {
        self.state().generation
    }

    /// Append the local echo and mark a request as in flight.
    ///
    /// Returns `None` without appending if the session was reset since `generation`.
    fn echo<F>(&self, generation: u64, build: F) -> Option<PendingGuard<'_>>
    where
        F: FnOnce(&mut SessionState) -> Message,
    {
        let mut state = self.state();
        if state.generation != generation {
            return None;
        }

        let message = build(&mut *state);
        state.store.add_message(message);
        state.in_flight += 1;
        Some(PendingGuard { state: &self.state })
    }

    /// Await the backend and append its reply or a failure note.
    async fn settle(
        &self,
        request: ChatRequest,
        generation: u64,
        failure_note: &str,
        guard: PendingGuard<'_>,
    ) -> SubmitOutcome {
        let kind = request.kind;
        let result = self.api.send_chat(request).await;

        let outcome = {
            let mut state = self.state();
            if state.generation != generation {
                tracing::debug!(?kind, "Discarding result for a reset session");
                SubmitOutcome::Stale
            } else {
                match result {
                    Ok(response) => {
                        let message =
                            state
                                .store
                                .create_message(MessageBody::Text, SENDER_BOT, response.response);
                        state.store.add_message(message);
                        SubmitOutcome::Replied
                    }
                    Err(err) => {
                        tracing::error!(?kind, "Chat request failed: {}", err);
                        state.last_error = Some(err.to_string());
                        let message = state.store.create_error_message(failure_note);
                        state.store.add_message(message);
                        SubmitOutcome::Failed
                    }
                }
            }
        };

        drop(guard);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChatResponse, MessageKind};
    use crate::upload::UploadPolicy;
    use crate::{Error, Result, GREETING};
    use image::{DynamicImage, GrayImage, ImageFormat};
    use std::collections::{HashMap, VecDeque};
    use std::io::Cursor;
    use std::time::Duration;
    use tokio::sync::oneshot;

    fn reply(text: &str) -> Result<ChatResponse> {
        Ok(ChatResponse {
            response: text.to_string(),
        })
    }

    /// Answers requests from a queue, in order.
    #[derive(Default)]
    struct ScriptedApi {
        replies: Mutex<VecDeque<Result<ChatResponse>>>,
        requests: Mutex<Vec<ChatRequest>>,
    }

    impl ScriptedApi {
        fn with_replies(replies: Vec<Result<ChatResponse>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<ChatRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl ChatApi for ScriptedApi {
        async fn send_chat(&self, request: ChatRequest) -> Result<ChatResponse> {
            self.requests.lock().unwrap().push(request);
            let next = self.replies.lock().unwrap().pop_front();
            next.unwrap_or_else(|| Err(Error::Task("no scripted reply".to_string())))
        }
    }

    /// Holds each request until the test releases it.
    ///
    /// Text requests are keyed by message, file requests by file name.
    #[derive(Default)]
    struct GatedApi {
        gates: Mutex<HashMap<String, oneshot::Receiver<Result<ChatResponse>>>>,
    }

    impl GatedApi {
        fn gate(&self, message: &str) -> oneshot::Sender<Result<ChatResponse>> {
            let (tx, rx) = oneshot::channel();
            self.gates.lock().unwrap().insert(message.to_string(), rx);
            tx
        }
    }

    impl ChatApi for GatedApi {
        async fn send_chat(&self, request: ChatRequest) -> Result<ChatResponse> {
            let key = request
                .message
                .or_else(|| request.file_info.and_then(|info| info.name))
                .unwrap_or_default();
            let gate = self.gates.lock().unwrap().remove(&key);
            match gate {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(Error::Task("gate dropped".to_string()))),
                None => Err(Error::Task(format!("no gate for {key}"))),
            }
        }
    }

    async fn wait_for_count<C: ChatApi>(session: &ChatSession<C>, count: usize) {
        for _ in 0..2000 {
            if session.message_count() >= count {
                return;
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        panic!("session never reached {count} messages");
    }

    fn png(width: u32, height: u32) -> Vec<u8> {
        let image = DynamicImage::ImageLuma8(GrayImage::new(width, height));
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    fn summary(messages: &[Message]) -> Vec<(MessageKind, String, String)> {
        messages
            .iter()
            .map(|m| (m.kind(), m.sender.clone(), m.content.clone()))
            .collect()
    }

    #[tokio::test]
    async fn test_send_text_success() {
        let session = ChatSession::new(
            ScriptedApi::with_replies(vec![reply("hello there")]),
            ChatConfig::default(),
        );

        let outcome = session.send_text("hi").await;

        assert_eq!(outcome, SubmitOutcome::Replied);
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(
            summary(&session.messages()),
            vec![
                (MessageKind::Text, "Bot".to_string(), GREETING.to_string()),
                (MessageKind::Text, "You".to_string(), "hi".to_string()),
                (MessageKind::Text, "Bot".to_string(), "hello there".to_string()),
            ]
        );
        assert_eq!(session.api().requests(), vec![ChatRequest::text("hi")]);
    }

    #[tokio::test]
    async fn test_send_blank_text_is_ignored() {
        let session = ChatSession::new(ScriptedApi::default(), ChatConfig::default());

        for input in ["", "   ", "\n\t "] {
            assert_eq!(session.send_text(input).await, SubmitOutcome::Ignored);
        }

        assert_eq!(session.message_count(), 1);
        assert!(session.api().requests().is_empty());
    }

    #[tokio::test]
    async fn test_send_text_failure_appends_system_note() {
        let session = ChatSession::new(
            ScriptedApi::with_replies(vec![
                Err(Error::Status {
                    status: 500,
                    message: "boom".to_string(),
                }),
                reply("back again"),
            ]),
            ChatConfig::default(),
        );

        assert_eq!(session.send_text("hi").await, SubmitOutcome::Failed);

        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].content, "hi");
        assert_eq!(messages[2].kind(), MessageKind::System);
        assert_eq!(messages[2].sender, "System");
        assert_eq!(messages[2].content, TEXT_FAILURE_NOTE);
        assert!(session.last_error().unwrap().contains("boom"));
        assert_eq!(session.phase(), Phase::Idle);

        // Still usable afterwards
        assert_eq!(session.send_text("again").await, SubmitOutcome::Replied);
        assert_eq!(session.messages().last().unwrap().content, "back again");
    }

    #[tokio::test]
    async fn test_send_file_rejected_without_request() {
        let config = ChatConfig {
            upload: UploadPolicy {
                max_file_size_mb: 1,
                ..UploadPolicy::default()
            },
            ..ChatConfig::default()
        };
        let session = ChatSession::new(ScriptedApi::default(), config);

        let too_big = FileUpload::new("big.txt", "text/plain", vec![0; 1024 * 1024 + 1]);
        assert_eq!(session.send_file(too_big).await, SubmitOutcome::Rejected);

        let wrong_type = FileUpload::new("tool.exe", "application/octet-stream", vec![1, 2]);
        assert_eq!(session.send_file(wrong_type).await, SubmitOutcome::Rejected);

        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].kind(), MessageKind::System);
        assert_eq!(messages[1].content, "File too large. Maximum size is 1MB.");
        assert!(messages[2].content.starts_with("File type not allowed."));
        assert!(session.api().requests().is_empty());
    }

    #[tokio::test]
    async fn test_send_generic_file() {
        let session = ChatSession::new(
            ScriptedApi::with_replies(vec![reply("Thanks for uploading notes.txt")]),
            ChatConfig::default(),
        );

        let upload = FileUpload::new("notes.txt", "text/plain", b"hello".to_vec());
        assert_eq!(session.send_file(upload).await, SubmitOutcome::Replied);

        let messages = session.messages();
        let echo = &messages[1];
        assert_eq!(echo.sender, "You");
        assert_eq!(echo.content, "Sent a file: notes.txt");
        assert_eq!(
            echo.file(),
            Some(&FileAttachment {
                file_name: "notes.txt".to_string(),
                file_type: "text/plain".to_string(),
                file_size: 5,
            })
        );
        assert_eq!(messages[2].content, "Thanks for uploading notes.txt");

        let requests = session.api().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].kind, ChatRequestType::File);
        assert_eq!(
            requests[0].file_info,
            Some(FileInfo {
                name: Some("notes.txt".to_string()),
                mime_type: Some("text/plain".to_string()),
                size: Some(5),
                width: None,
                height: None,
            })
        );
    }

    #[tokio::test]
    async fn test_send_image_uses_resolved_dimensions() {
        let session = ChatSession::new(
            ScriptedApi::with_replies(vec![reply("nice picture")]),
            ChatConfig::default(),
        );
        let data = png(1600, 1200);

        let upload = FileUpload::new("big.png", "image/png", data.clone());
        assert_eq!(session.send_file(upload).await, SubmitOutcome::Replied);

        let messages = session.messages();
        let echo = &messages[1];
        assert_eq!(echo.content, IMAGE_CAPTION);
        let image = echo.image().unwrap();
        assert_eq!((image.image_width, image.image_height), (800, 600));
        assert_eq!(image.image_alt, "big.png");

        let attachment = session.attachment(&image.image_url).unwrap();
        assert_eq!(&*attachment.bytes, data.as_slice());
        assert_eq!(attachment.mime_type, "image/png");

        let request = &session.api().requests()[0];
        assert_eq!(request.kind, ChatRequestType::Image);
        let info = request.file_info.as_ref().unwrap();
        assert_eq!((info.width, info.height), (Some(800), Some(600)));
        assert_eq!(info.size, Some(data.len() as u64));
    }

    #[tokio::test]
    async fn test_send_image_decode_failure_uses_fallback() {
        let session = ChatSession::new(
            ScriptedApi::with_replies(vec![Err(Error::Task("offline".to_string()))]),
            ChatConfig::default(),
        );

        let upload = FileUpload::new("broken.png", "image/png", b"not a png".to_vec());
        assert_eq!(session.send_file(upload).await, SubmitOutcome::Failed);

        let messages = session.messages();
        let image = messages[1].image().unwrap();
        assert_eq!((image.image_width, image.image_height), (400, 300));
        assert_eq!(messages[2].content, FILE_FAILURE_NOTE);

        let info = session.api().requests()[0].file_info.clone().unwrap();
        assert_eq!((info.width, info.height), (Some(400), Some(300)));
    }

    #[tokio::test]
    async fn test_reset_discards_late_reply() {
        let api = GatedApi::default();
        let release = api.gate("slow");
        let session = Arc::new(ChatSession::new(api, ChatConfig::default()));

        let task = {
            let session = session.clone();
            tokio::spawn(async move { session.send_text("slow").await })
        };

        wait_for_count(&session, 2).await;
        assert!(session.is_pending());

        session.reset();
        release.send(reply("too late")).unwrap();

        assert_eq!(task.await.unwrap(), SubmitOutcome::Stale);
        let messages = session.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, GREETING);
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn test_concurrent_replies_append_in_completion_order() {
        let api = GatedApi::default();
        let release_first = api.gate("first");
        let release_second = api.gate("second");
        let session = Arc::new(ChatSession::new(api, ChatConfig::default()));

        let first = {
            let session = session.clone();
            tokio::spawn(async move { session.send_text("first").await })
        };
        wait_for_count(&session, 2).await;
        let second = {
            let session = session.clone();
            tokio::spawn(async move { session.send_text("second").await })
        };
        wait_for_count(&session, 3).await;
        assert_eq!(session.phase(), Phase::Pending);

        release_second.send(reply("reply to second")).unwrap();
        assert_eq!(second.await.unwrap(), SubmitOutcome::Replied);
        assert!(session.is_pending());

        release_first.send(reply("reply to first")).unwrap();
        assert_eq!(first.await.unwrap(), SubmitOutcome::Replied);
        assert_eq!(session.phase(), Phase::Idle);

        let contents: Vec<String> = session.messages().into_iter().map(|m| m.content).collect();
        assert_eq!(
            contents,
            vec![GREETING, "first", "second", "reply to second", "reply to first"]
        );
    }

    #[tokio::test]
    async fn test_reset_clears_attachments_and_error() {
        let session = ChatSession::new(
            ScriptedApi::with_replies(vec![reply("ok"), Err(Error::Task("down".to_string()))]),
            ChatConfig::default(),
        );

        session
            .send_file(FileUpload::new("dot.png", "image/png", png(4, 4)))
            .await;
        session.send_text("hello").await;

        let url = session.messages()[1].image().unwrap().image_url.clone();
        assert!(session.attachment(&url).is_some());
        assert!(session.last_error().is_some());

        session.reset();

        assert!(session.attachment(&url).is_none());
        assert!(session.last_error().is_none());
        assert_eq!(session.message_count(), 1);
    }

    #[tokio::test]
    async fn test_reset_discards_late_file_reply() {
        let api = GatedApi::default();
        let release = api.gate("pic.png");
        let session = Arc::new(ChatSession::new(api, ChatConfig::default()));

        let task = {
            let session = session.clone();
            tokio::spawn(async move {
                session
                    .send_file(FileUpload::new("pic.png", "image/png", png(8, 8)))
                    .await
            })
        };

        wait_for_count(&session, 2).await;
        assert!(session.is_pending());
        let url = session.messages()[1].image().unwrap().image_url.clone();

        session.reset();
        release.send(reply("Nice image")).unwrap();

        assert_eq!(task.await.unwrap(), SubmitOutcome::Stale);
        let messages = session.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, GREETING);
        assert!(session.attachment(&url).is_none());
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn test_reset_during_image_decode_drops_upload() {
        // One blocking thread, held busy, so the decode queues behind it.
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .max_blocking_threads(1)
            .build()
            .unwrap();

        runtime.block_on(async {
            let (busy_tx, busy_rx) = oneshot::channel();
            let (unblock_tx, unblock_rx) = std::sync::mpsc::channel::<()>();
            let occupied = tokio::task::spawn_blocking(move || {
                let _ = busy_tx.send(());
                let _ = unblock_rx.recv();
            });
            busy_rx.await.unwrap();

            let session = ChatSession::new(
                ScriptedApi::with_replies(vec![reply("never sent")]),
                ChatConfig::default(),
            );
            let upload = FileUpload::new("pic.png", "image/png", png(8, 8));

            let (outcome, ()) = tokio::join!(session.send_file(upload), async {
                session.reset();
                unblock_tx.send(()).unwrap();
            });

            occupied.await.unwrap();
            assert_eq!(outcome, SubmitOutcome::Stale);
            assert_eq!(session.message_count(), 1);
            assert_eq!(session.messages()[0].content, GREETING);
            assert!(session.api().requests().is_empty());
            assert_eq!(session.phase(), Phase::Idle);
        });
    }

    #[tokio::test]
    async fn test_huge_upload_limit_accepts_file() {
        let config = ChatConfig {
            upload: UploadPolicy {
                max_file_size_mb: u64::MAX / 2,
                ..UploadPolicy::default()
            },
            ..ChatConfig::default()
        };
        let session = ChatSession::new(
            ScriptedApi::with_replies(vec![reply("got it")]),
            config,
        );

        let upload = FileUpload::new("a.txt", "text/plain", vec![1]);
        assert_eq!(session.send_file(upload).await, SubmitOutcome::Replied);
        assert_eq!(session.messages().last().unwrap().content, "got it");
    }
}
