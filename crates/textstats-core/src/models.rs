//! Core data types for textstats.
//!
//! This module defines the primary types used throughout the library:
//! - [`AnalysisResult`] - Word count, sentence count and top words
//! - [`WordFrequency`] - A `(word, frequency)` pair
//! - [`Method`] - How a result was produced
//! - [`Analysis`] - A result tagged with its [`Method`]
//! - [`StrategyKind`] - Which analysis strategy to run

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextStatsError};

/// Maximum number of entries in [`AnalysisResult::top_words`].
pub const TOP_WORDS_LIMIT: usize = 10;

/// A normalized word and the number of times it occurred.
///
/// Serializes as a two-element JSON array: `["word", 3]`.
pub type WordFrequency = (String, usize);

/// Statistics computed over a block of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Number of tokens, counting every occurrence.
    pub word_count: usize,
    /// Number of non-blank sentence segments.
    pub sentence_count: usize,
    /// Up to ten most frequent tokens, by descending frequency.
    pub top_words: Vec<WordFrequency>,
}

impl AnalysisResult {
    /// The result for empty or whitespace-only text.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check the structural invariants every result must satisfy.
    ///
    /// Used to reject results that did not come from the local analyzer.
    pub fn validate(&self) -> Result<()> {
        let malformed = |msg: String| Err(TextStatsError::MalformedResponse(msg));

        if self.top_words.len() > TOP_WORDS_LIMIT {
            return malformed(format!(
                "top_words has {} entries, at most {} allowed",
                self.top_words.len(),
                TOP_WORDS_LIMIT
            ));
        }
        if self.word_count == 0 && self.sentence_count != 0 {
            return malformed(format!(
                "sentence_count is {} but word_count is 0",
                self.sentence_count
            ));
        }
        if self.sentence_count == 0 && !self.top_words.is_empty() {
            return malformed("top_words is not empty but sentence_count is 0".to_string());
        }

        let mut total = 0usize;
        let mut previous = usize::MAX;
        let mut seen = HashSet::new();
        for (word, frequency) in &self.top_words {
            if word.trim().is_empty() {
                return malformed("top_words contains an empty word".to_string());
            }
            if !seen.insert(word.as_str()) {
                return malformed(format!("word '{}' appears more than once", word));
            }
            if *frequency == 0 {
                return malformed(format!("word '{}' has frequency 0", word));
            }
            if *frequency > previous {
                return malformed("top_words is not sorted by descending frequency".to_string());
            }
            previous = *frequency;
            total = total.saturating_add(*frequency);
        }
        if total > self.word_count {
            return malformed(format!(
                "top_words frequencies sum to {} which exceeds word_count {}",
                total, self.word_count
            ));
        }

        Ok(())
    }
}

/// How an [`Analysis`] was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Computed by the deterministic local analyzer.
    Local,
    /// Returned by the remote language model.
    Remote,
    /// Remote delegation failed; computed locally instead.
    LocalFallback,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Local => write!(f, "local"),
            Method::Remote => write!(f, "remote"),
            Method::LocalFallback => write!(f, "local_fallback"),
        }
    }
}

/// An [`AnalysisResult`] plus an advisory tag describing where it came from.
///
/// The tag fields sit next to the result fields when serialized, so the JSON
/// output is the plain result schema with `method` (and, after a fallback,
/// `fallback_reason`) appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub method: Method,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}

impl Analysis {
    pub fn local(result: AnalysisResult) -> Self {
        Self {
            result,
            method: Method::Local,
            fallback_reason: None,
        }
    }

    pub fn remote(result: AnalysisResult) -> Self {
        Self {
            result,
            method: Method::Remote,
            fallback_reason: None,
        }
    }

    pub fn fallback(result: AnalysisResult, reason: impl Into<String>) -> Self {
        Self {
            result,
            method: Method::LocalFallback,
            fallback_reason: Some(reason.into()),
        }
    }
}

/// Which analysis strategy to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Always compute locally.
    Local,
    /// Delegate to the remote model, falling back to local on failure.
    /// Requires a remote configuration.
    Remote,
    /// Remote when a configuration is available, local otherwise.
    #[default]
    Auto,
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKind::Local => write!(f, "local"),
            StrategyKind::Remote => write!(f, "remote"),
            StrategyKind::Auto => write!(f, "auto"),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = TextStatsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "local" => Ok(StrategyKind::Local),
            "remote" => Ok(StrategyKind::Remote),
            "auto" => Ok(StrategyKind::Auto),
            _ => Err(TextStatsError::Config(format!(
                "Unknown strategy: '{}'. Expected 'local', 'remote', or 'auto'",
                s
            ))),
        }
    }
}
