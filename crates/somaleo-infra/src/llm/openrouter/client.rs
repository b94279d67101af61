//! OpenRouterClient -- concrete [`ChatClient`] implementation for OpenRouter.
//!
//! Sends the full transcript to `{base_url}/chat/completions` with bearer
//! authentication and OpenRouter's attribution headers (`HTTP-Referer`,
//! `X-Title`). Non-streaming only.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use somaleo_core::llm::client::ChatClient;
use somaleo_types::config::UpstreamConfig;
use somaleo_types::llm::{LlmError, Message};

use super::types::{ChatCompletionRequest, parse_completion};
use crate::secret::read_api_key;

/// OpenRouter chat-completion client.
///
/// # API Key Security
///
/// The API key is stored as a [`SecretString`] and is only exposed when
/// building the `Authorization` header.
pub struct OpenRouterClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
    temperature: f64,
    referer: String,
    title: String,
}

impl OpenRouterClient {
    /// Create a client from an API key and upstream settings.
    ///
    /// An empty key is rejected with [`LlmError::MissingCredential`].
    pub fn new(api_key: SecretString, config: &UpstreamConfig) -> Result<Self, LlmError> {
        if api_key.expose_secret().is_empty() {
            return Err(LlmError::MissingCredential(config.api_key_env.clone()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            referer: config.referer.clone(),
            title: config.title.clone(),
        })
    }

    /// Create a client reading the key from `config.api_key_env`.
    pub fn from_env(config: &UpstreamConfig) -> Result<Self, LlmError> {
        let api_key = read_api_key(&config.api_key_env)?;
        Self::new(api_key, config)
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

// No Debug derive: keeps the client out of `{:?}` output entirely.

impl ChatClient for OpenRouterClient {
    fn name(&self) -> &str {
        "openrouter"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn temperature(&self) -> f64 {
        self.temperature
    }

    async fn complete(&self, messages: &[Message]) -> Result<String, LlmError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(self.url("/chat/completions"))
            .bearer_auth(self.api_key.expose_secret())
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", &self.title)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let raw = response
            .bytes()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;
        debug!(status, bytes = raw.len() as u64, "Completion response received");

        parse_completion(status, &raw)
    }
}
