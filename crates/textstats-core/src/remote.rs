//! Delegation of text statistics to a remote language model.
//!
//! [`RemoteAnalyzer`] builds a fixed prompt, hands it to a
//! [`CompletionClient`] and accepts the reply only if it parses into an
//! [`AnalysisResult`] that satisfies every structural invariant. It never
//! returns a partially valid result; callers decide what to do on error.

use std::fmt;
use std::time::Duration;

use tracing::debug;

use crate::error::{Result, TextStatsError};
use crate::models::AnalysisResult;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that analyzes text and returns structured JSON data.";

/// Connection settings for the remote model.
///
/// Built by the caller (typically from flags and environment) and injected
/// into the client; nothing in this crate reads the environment.
#[derive(Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl RemoteConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// Keeps the credential out of debug logs.
impl fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// A chat-completion style model endpoint.
pub trait CompletionClient: Send + Sync {
    /// Send a system and a user message, returning the assistant's reply text.
    fn complete(&self, system: &str, user: &str) -> Result<String>;

    /// Client name for logging.
    fn name(&self) -> &'static str;
}

/// Build the user message asking the model for the statistics schema.
pub fn build_user_prompt(text: &str) -> String {
    format!(
        r#"Analyze the following text and provide statistics in JSON format.
Requirements:
1. Word count (total number of words).
2. Sentence count (total number of sentences).
3. Top 10 most frequent words, ignoring punctuation and case.

Text:
"""{text}"""

Return ONLY a JSON object with the following keys:
"word_count": int,
"sentence_count": int,
"top_words": [[word, frequency], ...]"#
    )
}

/// Parse and validate a model reply.
///
/// Extra keys are ignored. Missing keys, wrong types, negative numbers,
/// entries that are not `[word, frequency]` pairs, and results violating
/// [`AnalysisResult::validate`] are all [`TextStatsError::MalformedResponse`].
pub fn parse_response(content: &str) -> Result<AnalysisResult> {
    let value: serde_json::Value = serde_json::from_str(content.trim())
        .map_err(|e| TextStatsError::MalformedResponse(format!("not valid JSON: {}", e)))?;
    if !value.is_object() {
        return Err(TextStatsError::MalformedResponse(
            "expected a JSON object".to_string(),
        ));
    }

    let result: AnalysisResult = serde_json::from_value(value)
        .map_err(|e| TextStatsError::MalformedResponse(e.to_string()))?;
    result.validate()?;
    Ok(result)
}

/// Computes statistics by asking a remote model.
pub struct RemoteAnalyzer<C> {
    client: C,
}

impl<C: CompletionClient> RemoteAnalyzer<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client_name(&self) -> &'static str {
        self.client.name()
    }

    /// Ask the model for statistics over `text`.
    ///
    /// Blank text is answered with [`AnalysisResult::empty`] without a request.
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult> {
        if text.trim().is_empty() {
            return Ok(AnalysisResult::empty());
        }

        debug!(
            client = self.client.name(),
            bytes = text.len(),
            "Requesting remote analysis"
        );
        let content = self.client.complete(SYSTEM_PROMPT, &build_user_prompt(text))?;
        parse_response(&content)
    }
}
