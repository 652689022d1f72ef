use reqwest::Url;

use super::{resolve_credential, Credential, DEFAULT_MODEL};
use crate::domain::DomainError;

/// GitHub Models chat-completion endpoint (OpenAI-compatible).
pub const DEFAULT_ENDPOINT: &str = "https://models.inference.ai.azure.com/chat/completions";
pub const ENDPOINT_ENV_VAR: &str = "ASKGH_ENDPOINT";
pub const MODEL_ENV_VAR: &str = "ASKGH_MODEL";

/// Everything the inference client needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    endpoint: String,
    model: String,
    credential: Option<Credential>,
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            credential: None,
        }
    }

    /// Resolve configuration from `lookup` with the usual defaults:
    ///
    /// | Variable         | Default                     |
    /// |------------------|-----------------------------|
    /// | `ASKGH_ENDPOINT` | GitHub Models endpoint      |
    /// | `ASKGH_MODEL`    | `gpt-4o`                    |
    /// | `GITHUB_TOKEN`   | none (queries short-circuit)|
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup(ENDPOINT_ENV_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let model = lookup(MODEL_ENV_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let credential = resolve_credential(None, &lookup);
        Self {
            endpoint,
            model,
            credential,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(super::env_lookup)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_credential(mut self, credential: Option<Credential>) -> Self {
        self.credential = credential;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.model.trim().is_empty() {
            return Err(DomainError::invalid_input("model id must not be empty"));
        }
        let url = Url::parse(&self.endpoint).map_err(|e| {
            DomainError::invalid_input(format!("invalid endpoint {:?}: {e}", self.endpoint))
        })?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(DomainError::invalid_input(format!(
                "endpoint must be an http(s) URL with a host, got {:?}",
                self.endpoint
            )));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_MODEL)
    }
}
