//! HTTP client for OpenAI-compatible chat completion endpoints.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TextStatsError};
use crate::remote::{CompletionClient, RemoteConfig};

/// Longest slice of an error body carried into an error message.
const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

/// Blocking chat-completions client with a request timeout.
pub struct OpenAiClient {
    http: Client,
    config: RemoteConfig,
}

impl OpenAiClient {
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TextStatsError::Request(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { http, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn transport_error(&self, err: reqwest::Error) -> TextStatsError {
        if err.is_timeout() {
            TextStatsError::Timeout(self.config.timeout)
        } else if err.is_connect() {
            TextStatsError::Request(format!("Connection error: {}", err))
        } else {
            TextStatsError::Request(err.to_string())
        }
    }
}

fn status_error(status: StatusCode, body: &str) -> TextStatsError {
    let message: String = body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect();
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            TextStatsError::Authentication(format!("HTTP {}: {}", status.as_u16(), message))
        }
        StatusCode::TOO_MANY_REQUESTS => TextStatsError::RateLimited(message),
        _ => TextStatsError::Status {
            status: status.as_u16(),
            message,
        },
    }
}

impl CompletionClient for OpenAiClient {
    fn complete(&self, system: &str, user: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().map_err(|e| self.transport_error(e))?;
        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        let envelope: ChatResponse = serde_json::from_str(&body).map_err(|e| {
            TextStatsError::MalformedResponse(format!("invalid completion envelope: {}", e))
        })?;

        envelope
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                TextStatsError::MalformedResponse("completion has no message content".to_string())
            })
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}
