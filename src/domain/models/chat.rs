use std::fmt;

use serde::{Deserialize, Serialize};

/// System instruction sent ahead of every question.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that provides clear and accurate answers to questions.";
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_TOP_P: f64 = 1.0;
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    role: Role,
    content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Body of a chat-completion POST. Field order matches the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    messages: Vec<ChatMessage>,
    model: String,
    temperature: f64,
    top_p: f64,
    max_tokens: u32,
}

impl ChatRequest {
    /// A request carrying the fixed system prompt and `question` verbatim as
    /// the user message.
    pub fn for_question(question: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(question)],
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn top_p(&self) -> f64 {
        self.top_p
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    /// Content of the user message, i.e. the question as typed.
    pub fn user_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
    }
}

/// Outcome of a single query. Exactly one variant per call; none of them
/// aborts the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatResponse {
    Success(String),
    ApiError(String),
    TransportError(String),
    ParseError(String),
    MissingCredential,
}

impl ChatResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn answer(&self) -> Option<&str> {
        match self {
            Self::Success(answer) => Some(answer),
            _ => None,
        }
    }

    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::ApiError(_) => "api_error",
            Self::TransportError(_) => "transport_error",
            Self::ParseError(_) => "parse_error",
            Self::MissingCredential => "missing_credential",
        }
    }
}

impl fmt::Display for ChatResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(answer) => f.write_str(answer),
            Self::ApiError(msg) => write!(f, "API Error: {msg}"),
            Self::TransportError(msg) => write!(f, "Request failed: {msg}"),
            Self::ParseError(msg) => write!(f, "Failed to parse response: {msg}"),
            Self::MissingCredential => f.write_str(
                "Error: No API key provided. Set GITHUB_TOKEN in .env or pass --token.",
            ),
        }
    }
}
