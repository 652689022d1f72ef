pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{classify_body, Answer, AnswerQuestionUseCase, ChatTransport, InferenceClient};

pub use cli::{format_answer, is_exit_command, Repl};

pub use connector::{HttpChatTransport, MockChatTransport, MockReply, RecordedCall};

pub use domain::{
    env_lookup, normalize, resolve_credential, ChatMessage, ChatRequest, ChatResponse,
    ClientConfig, Credential, DomainError, NormalizedForm, Role, DEFAULT_ENDPOINT, DEFAULT_MODEL,
    SYSTEM_PROMPT,
};
