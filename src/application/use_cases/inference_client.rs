use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::application::ChatTransport;
use crate::domain::{ChatRequest, ChatResponse, ClientConfig, Credential, DomainError};

/// Stateless wrapper around one chat-completion endpoint.
///
/// Every call builds a fresh [`ChatRequest`], sends it once through the
/// configured [`ChatTransport`] and classifies the outcome into a
/// [`ChatResponse`]. There is no retry and nothing is remembered between calls.
pub struct InferenceClient {
    transport: Arc<dyn ChatTransport>,
    config: ClientConfig,
}

impl InferenceClient {
    pub fn new(transport: Arc<dyn ChatTransport>, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Ask `question` using the configured model.
    ///
    /// `credential` overrides the configured one for this call only.
    pub async fn query(&self, question: &str, credential: Option<&str>) -> ChatResponse {
        self.query_with_model(question, credential, self.config.model())
            .await
    }

    pub async fn query_with_model(
        &self,
        question: &str,
        credential: Option<&str>,
        model: &str,
    ) -> ChatResponse {
        let credential = match credential
            .and_then(Credential::new)
            .or_else(|| self.config.credential().cloned())
        {
            Some(c) => c,
            None => {
                warn!("No credential configured; skipping request");
                return ChatResponse::MissingCredential;
            }
        };

        let request = ChatRequest::for_question(question, model);
        info!(
            "Querying {} with model {} ({} chars)",
            self.config.endpoint(),
            model,
            question.len()
        );

        let body = match self
            .transport
            .send(self.config.endpoint(), &credential, &request)
            .await
        {
            Ok(body) => body,
            Err(e) => {
                warn!("Chat request failed: {e}");
                return ChatResponse::TransportError(transport_message(e));
            }
        };

        let response = classify_body(&body);
        debug!("Response classified as {}", response.kind());
        response
    }
}

fn transport_message(err: DomainError) -> String {
    match err {
        DomainError::Transport(msg) => msg,
        other => other.to_string(),
    }
}

/// Interpret a successfully transported body.
///
/// Precedence, first match wins: unparseable JSON, non-empty `choices`,
/// `error` field, anything else. Only the first choice is ever used.
pub fn classify_body(body: &str) -> ChatResponse {
    let data: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => return ChatResponse::ParseError(e.to_string()),
    };

    if let Some(first) = data
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first())
    {
        return match first
            .get("message")
            .and_then(|m| m.get("content"))
            .and_then(Value::as_str)
        {
            Some(content) => ChatResponse::Success(content.to_string()),
            None => ChatResponse::ParseError(format!(
                "choices[0].message.content missing or not a string: {first}"
            )),
        };
    }

    if let Some(error) = data.get("error") {
        return ChatResponse::ApiError(stringify(error));
    }

    ChatResponse::ParseError(format!("unexpected response shape: {data}"))
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
