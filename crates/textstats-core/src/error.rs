//! Error types for textstats-core.
//!
//! The local analyzer is total and never produces an error. Everything in
//! here describes why a remote delegation attempt failed, plus the one
//! configuration mistake a caller can make when selecting a strategy.

use std::time::Duration;

use thiserror::Error;

/// The main error type for textstats operations.
#[derive(Debug, Error)]
pub enum TextStatsError {
    /// Network-level failure (connection refused, DNS, TLS, body read).
    #[error("Request error: {0}")]
    Request(String),

    /// The remote call did not finish within the configured timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The service rejected the credential (HTTP 401/403).
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The service is throttling requests (HTTP 429).
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Any other non-success HTTP status.
    #[error("Remote service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The response was not JSON or did not match the statistics schema.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Invalid strategy configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for textstats operations.
pub type Result<T> = std::result::Result<T, TextStatsError>;
