/// Lowercased, punctuation-free rendition of a question plus its whitespace
/// tokens. Only ever used for local display.
///
/// Built exclusively by [`crate::domain::normalize`]; there is no public
/// constructor and no deserialization path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedForm {
    normalized_text: String,
    tokens: Vec<String>,
}

impl NormalizedForm {
    /// Build a form from already-normalized text. Tokens are derived from the
    /// text so the two can never disagree.
    pub(crate) fn from_normalized(normalized_text: impl Into<String>) -> Self {
        let normalized_text = normalized_text.into();
        let tokens = normalized_text
            .split_whitespace()
            .map(str::to_string)
            .collect();
        Self {
            normalized_text,
            tokens,
        }
    }

    pub fn normalized_text(&self) -> &str {
        &self.normalized_text
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
