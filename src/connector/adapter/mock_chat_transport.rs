use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ChatTransport;
use crate::domain::{ChatRequest, Credential, DomainError};

/// What the mock hands back for a call.
#[derive(Debug, Clone)]
pub enum MockReply {
    Body(String),
    Failure(String),
}

/// One observed call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub endpoint: String,
    pub token: String,
    pub request: ChatRequest,
}

/// In-memory [`ChatTransport`] for tests and offline runs.
///
/// Replies are served from a queue; once it is drained the fallback reply is
/// repeated. Every call is recorded so tests can assert how many requests were
/// made and what they carried.
pub struct MockChatTransport {
    queue: Mutex<VecDeque<MockReply>>,
    fallback: MockReply,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockChatTransport {
    pub fn new(fallback: MockReply) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            fallback,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Always reply with `body`.
    pub fn with_body(body: impl Into<String>) -> Self {
        Self::new(MockReply::Body(body.into()))
    }

    /// Always fail as a transport error would.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(MockReply::Failure(message.into()))
    }

    /// Reply with `answer` wrapped in a single-choice completion.
    pub fn answering(answer: &str) -> Self {
        let body = serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": answer}}]
        });
        Self::with_body(body.to_string())
    }

    /// Queue a reply ahead of the fallback.
    pub fn then(self, reply: MockReply) -> Self {
        self.queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl Default for MockChatTransport {
    fn default() -> Self {
        Self::answering("mock answer")
    }
}

#[async_trait]
impl ChatTransport for MockChatTransport {
    async fn send(
        &self,
        endpoint: &str,
        credential: &Credential,
        request: &ChatRequest,
    ) -> Result<String, DomainError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(RecordedCall {
                endpoint: endpoint.to_string(),
                token: credential.expose().to_string(),
                request: request.clone(),
            });

        let reply = self
            .queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        debug!("MockChatTransport replying with {:?}", reply);

        match reply {
            MockReply::Body(body) => Ok(body),
            MockReply::Failure(msg) => Err(DomainError::transport(msg)),
        }
    }
}
