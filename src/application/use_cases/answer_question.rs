use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::application::InferenceClient;
use crate::domain::{normalize, ChatResponse, NormalizedForm};

/// Result of one question turn.
#[derive(Debug, Clone)]
pub struct Answer {
    normalized: NormalizedForm,
    response: ChatResponse,
}

impl Answer {
    pub fn normalized(&self) -> &NormalizedForm {
        &self.normalized
    }

    pub fn response(&self) -> &ChatResponse {
        &self.response
    }

    pub fn is_success(&self) -> bool {
        self.response.is_success()
    }
}

/// Runs one turn: normalizes the question for display and sends the raw,
/// untouched question upstream. The two steps never feed each other.
pub struct AnswerQuestionUseCase {
    client: Arc<InferenceClient>,
}

impl AnswerQuestionUseCase {
    pub fn new(client: Arc<InferenceClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &InferenceClient {
        &self.client
    }

    pub async fn execute(&self, question: &str) -> Answer {
        let normalized = normalize(question);
        debug!("Normalized question into {} tokens", normalized.token_count());

        let start_time = Instant::now();
        let response = self.client.query(question, None).await;
        info!(
            "Query finished as {} in {:.2}s",
            response.kind(),
            start_time.elapsed().as_secs_f64()
        );

        Answer {
            normalized,
            response,
        }
    }
}
