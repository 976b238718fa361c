/// LLM Client: the single point of entry for completion-service calls.
///
/// ARCHITECTURAL RULE: No other module may talk to the model endpoint directly.
/// Generation code depends on the `CompletionService` trait only, so tests can
/// swap in a stub without touching the SMS pipeline.
///
/// Calls are single-shot: no retry, bounded by the client timeout.
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

#[cfg(test)]
pub mod stub;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Text in, text out. Implementations must not panic on upstream failure.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Sends `prompt` and returns the generated text. `max_tokens` is a hint
    /// bounding the response length.
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
    #[serde(default)]
    eval_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OllamaError {
    error: String,
}

/// Completion client for a locally hosted Ollama `/api/generate` endpoint.
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    url: String,
    model: String,
    temperature: f32,
}

impl OllamaClient {
    pub fn new(url: &str, model: &str, temperature: f32, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .context("Failed to build HTTP client")?,
            url: url.to_string(),
            model: model.to_string(),
            temperature,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionService for OllamaClient {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, LlmError> {
        let request_body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: self.temperature,
                num_predict: max_tokens,
            },
        };

        let response = self
            .client
            .post(&self.url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                warn!("Completion request to {} failed: {e}", self.url);
                LlmError::Http(e)
            })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<OllamaError>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            warn!("Completion endpoint returned {status}: {message}");
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let generated: GenerateResponse = response.json().await?;

        debug!(
            "Completion succeeded: model={}, eval_count={:?}",
            self.model, generated.eval_count
        );

        let text = generated.response.trim();
        if text.is_empty() {
            return Err(LlmError::EmptyContent);
        }

        Ok(text.to_string())
    }
}
