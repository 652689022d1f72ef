use std::fmt;

/// Environment variable holding the bearer token for the GitHub Models API.
pub const CREDENTIAL_ENV_VAR: &str = "GITHUB_TOKEN";

/// Bearer token authorizing calls to the chat-completion endpoint.
///
/// The secret is only reachable through [`Credential::expose`]; `Debug` and
/// `Display` print a redacted placeholder so the token can't leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token. Blank tokens are treated as no token at all.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Resolve the credential: an explicit value wins, then whatever `lookup`
/// returns for [`CREDENTIAL_ENV_VAR`], otherwise `None`.
///
/// `lookup` is injected so the environment fallback is testable without
/// mutating process state; production callers pass [`env_lookup`].
pub fn resolve_credential<F>(explicit: Option<&str>, lookup: F) -> Option<Credential>
where
    F: Fn(&str) -> Option<String>,
{
    explicit
        .and_then(Credential::new)
        .or_else(|| lookup(CREDENTIAL_ENV_VAR).and_then(Credential::new))
}

/// Process environment lookup suitable for [`resolve_credential`].
pub fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with(token: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            assert_eq!(key, CREDENTIAL_ENV_VAR);
            token.map(str::to_string)
        }
    }

    #[test]
    fn explicit_credential_wins_over_environment() {
        let cred = resolve_credential(Some("explicit"), env_with(Some("from-env"))).unwrap();
        assert_eq!(cred.expose(), "explicit");
    }

    #[test]
    fn environment_used_when_no_explicit_credential() {
        let cred = resolve_credential(None, env_with(Some("from-env"))).unwrap();
        assert_eq!(cred.expose(), "from-env");
    }

    #[test]
    fn blank_explicit_credential_falls_back_to_environment() {
        let cred = resolve_credential(Some("   "), env_with(Some("from-env"))).unwrap();
        assert_eq!(cred.expose(), "from-env");
    }

    #[test]
    fn missing_everywhere_resolves_to_none() {
        assert!(resolve_credential(None, env_with(None)).is_none());
        assert!(resolve_credential(Some(""), env_with(Some(""))).is_none());
    }

    #[test]
    fn debug_and_display_are_redacted() {
        let cred = Credential::new("ghp_secret").unwrap();
        assert!(!format!("{cred:?}").contains("ghp_secret"));
        assert!(!format!("{cred}").contains("ghp_secret"));
        assert_eq!(cred.bearer_header(), "Bearer ghp_secret");
    }
}
