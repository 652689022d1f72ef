use async_trait::async_trait;

use crate::domain::{ChatRequest, Credential, DomainError};

/// Delivers one chat-completion request and hands back the raw response body.
///
/// Implementors own the wire details (HTTP client, headers, status handling).
/// Any failure before a successful (2xx) body is in hand, including non-2xx
/// statuses, must be reported as [`DomainError::Transport`]. Interpreting the
/// body is left to [`crate::application::InferenceClient`].
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(
        &self,
        endpoint: &str,
        credential: &Credential,
        request: &ChatRequest,
    ) -> Result<String, DomainError>;
}
