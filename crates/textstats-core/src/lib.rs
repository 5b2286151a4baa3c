//! # textstats-core
//!
//! Word count, sentence count and top-ten word frequencies for plain text.
//!
//! ## Features
//!
//! - **Deterministic analyzer**: [`analyze`] is a pure, total function over
//!   any `&str`, linear in the input size.
//! - **Normalization**: case-insensitive; ASCII punctuation is stripped while
//!   internal apostrophes and hyphens are kept (`don't`, `end-to-end`).
//! - **Sentence segmentation**: runs of `.`, `!`, `?` count as one boundary.
//! - **Remote delegation**: [`FallbackStrategy`] asks an OpenAI-compatible
//!   model first and recomputes locally on any failure.
//!
//! ## Example
//!
//! ```rust
//! use textstats_core::prelude::*;
//!
//! let result = analyze("Wait... really?! Yes. Yes.");
//! assert_eq!(result.sentence_count, 4);
//! assert_eq!(result.word_count, 4);
//! assert_eq!(result.top_words[0], ("yes".to_string(), 2));
//!
//! // Without a credential the automatic strategy stays local.
//! let strategy = build_strategy(StrategyKind::Auto, None).unwrap();
//! let analysis = strategy.analyze("Hello world.");
//! assert_eq!(analysis.method, Method::Local);
//! ```

pub mod analyze;
pub mod error;
pub mod models;
pub mod openai;
pub mod remote;
pub mod strategy;

// Re-export commonly used types at the crate root
pub use analyze::{analyze, count_sentences, rank_words, split_sentences, tokenize};
pub use error::{Result, TextStatsError};
pub use models::{Analysis, AnalysisResult, Method, StrategyKind, TOP_WORDS_LIMIT, WordFrequency};
pub use openai::OpenAiClient;
pub use remote::{CompletionClient, RemoteAnalyzer, RemoteConfig};
pub use strategy::{AnalysisStrategy, FallbackStrategy, LocalStrategy, build_strategy};

/// Prelude module for convenient imports.
///
/// ```
/// use textstats_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::analyze::{analyze, count_sentences, split_sentences, tokenize};
    pub use crate::error::{Result, TextStatsError};
    pub use crate::models::*;
    pub use crate::remote::{CompletionClient, RemoteConfig};
    pub use crate::strategy::{AnalysisStrategy, build_strategy};
}
