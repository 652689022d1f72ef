use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::{debug, warn};

use crate::application::ChatTransport;
use crate::domain::{ChatRequest, Credential, DomainError};

/// [`ChatTransport`] over HTTPS using `reqwest`.
///
/// Sends `Authorization: Bearer <token>` and a JSON body. No timeout is set
/// beyond the client default and nothing is retried. Non-2xx statuses are
/// reported as transport failures with the status and whatever body the
/// server returned.
pub struct HttpChatTransport {
    client: reqwest::Client,
}

impl HttpChatTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpChatTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    async fn send(
        &self,
        endpoint: &str,
        credential: &Credential,
        request: &ChatRequest,
    ) -> Result<String, DomainError> {
        let response = self
            .client
            .post(endpoint)
            .header(AUTHORIZATION, credential.bearer_header())
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| DomainError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Chat endpoint returned {status}: {body}");
            return Err(DomainError::transport(if body.is_empty() {
                format!("{status} from {endpoint}")
            } else {
                format!("{status} from {endpoint}: {body}")
            }));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::transport(format!("failed to read response body: {e}")))?;
        debug!("Chat endpoint returned {} bytes", body.len());
        Ok(body)
    }
}
