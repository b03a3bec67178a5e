use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    config::UpstreamConfig,
    error::{RelayError, Result},
};

pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";
pub const ANTHROPIC_VERSION: &str = "2023-06-01";
pub const MODEL: &str = "claude-3-haiku-20240307";
pub const MAX_TOKENS: u32 = 1000;

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<RequestMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Blocks stay untyped: only the first one is read, and only its `text`.
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<Value>,
}

/// Client for the Anthropic Messages API.
///
/// Sends one single-turn request per prompt. No timeout, retry or backoff is
/// configured; the call lives exactly as long as the inbound request.
#[derive(Clone)]
pub struct MessagesClient {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl MessagesClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("chat-relay/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|error| {
                RelayError::Internal(format!("Failed to create upstream HTTP client: {error}"))
            })?;

        Ok(Self {
            client,
            url: config.api_url.clone(),
            api_key: config.api_key.clone().unwrap_or_default(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Forwards `prompt` verbatim and returns the text of the first content block.
    pub async fn send_message(&self, prompt: &str) -> Result<String> {
        let request = build_request(prompt);

        let response = self
            .client
            .post(&self.url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|error| {
                tracing::error!(error = %error, url = %self.url, "Upstream request failed");
                RelayError::Http(error)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(error) => {
                    tracing::error!(status = %status, error = %error, "Failed to read upstream error body");
                    String::new()
                }
            };
            tracing::error!(status = %status, body = %body, "Upstream API returned an error status");
            return Err(RelayError::Upstream {
                status,
                detail: body,
            });
        }

        let bytes = response.bytes().await.map_err(|error| {
            tracing::error!(error = %error, "Failed to read upstream response body");
            RelayError::Http(error)
        })?;

        let parsed: MessagesResponse = serde_json::from_slice(&bytes).map_err(|error| {
            tracing::error!(
                error = %error,
                body_preview = %preview(&String::from_utf8_lossy(&bytes)),
                "Failed to parse upstream response"
            );
            RelayError::Json(error)
        })?;

        extract_text(parsed)
    }
}

fn build_request(prompt: &str) -> MessagesRequest<'_> {
    MessagesRequest {
        model: MODEL,
        max_tokens: MAX_TOKENS,
        messages: vec![RequestMessage {
            role: "user",
            content: prompt,
        }],
    }
}

fn extract_text(response: MessagesResponse) -> Result<String> {
    let Some(first) = response.content.into_iter().next() else {
        tracing::error!("Upstream response contained no content blocks");
        return Err(RelayError::Internal(
            "Upstream response contained no content blocks".to_string(),
        ));
    };

    match first.get("text").and_then(Value::as_str) {
        Some(text) => Ok(text.to_string()),
        None => {
            tracing::error!(block = %first, "First upstream content block has no text");
            Err(RelayError::Internal(
                "First upstream content block has no text".to_string(),
            ))
        }
    }
}

/// First 100 characters of `text`, for log lines.
pub fn preview(text: &str) -> String {
    text.chars().take(100).collect()
}
