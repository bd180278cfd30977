//! Groq Provider Implementation
//!
//! Provides integration with Groq's OpenAI-compatible chat-completions API.
//! Any endpoint speaking the same protocol can be used via
//! [`GroqProvider::with_endpoint`].
//!
//! # Features
//!
//! - Async HTTP communication with the chat-completions API
//! - API key, model and endpoint passed explicitly (no environment lookups)
//! - One request per prompt; failures surface immediately
//! - Timeout handling
//!
//! # Examples
//!
//! ```no_run
//! use abbrex_llm::GroqProvider;
//!
//! let provider = GroqProvider::new("gsk_...", "llama-3.1-8b-instant").unwrap();
//! ```

use crate::LlmError;
use abbrex_domain::traits::TextGenerator;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default Groq API endpoint (OpenAI-compatible base URL)
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1";

/// Default chat model
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Default timeout for LLM requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Chat-completions provider for remote text generation
pub struct GroqProvider {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

/// Request body for the chat-completions API
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response from the chat-completions API
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl GroqProvider {
    /// Create a new provider against the default endpoint
    ///
    /// # Parameters
    ///
    /// - `api_key`: API key sent as a bearer token
    /// - `model`: Model to use (e.g., "llama-3.1-8b-instant")
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Authentication`] when the key is blank, or
    /// [`LlmError::Other`] if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LlmError::Authentication("API key is not set".to_string()));
        }

        let client = build_client(Duration::from_secs(DEFAULT_TIMEOUT_SECS))?;

        Ok(Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: model.into(),
            api_key,
            client,
        })
    }

    /// Create a provider using the default model
    pub fn default_model(api_key: impl Into<String>) -> Result<Self, LlmError> {
        Self::new(api_key, DEFAULT_MODEL)
    }

    /// Point the provider at a different OpenAI-compatible base URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, LlmError> {
        self.client = build_client(timeout)?;
        Ok(self)
    }

    /// Model name used for requests
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate a completion for a single user message
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The endpoint is unreachable
    /// - The API key is rejected
    /// - The rate limit or quota is exceeded
    /// - The model is not available
    /// - The response format is invalid
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.endpoint);

        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            let body = response.json::<ChatCompletionResponse>().await.map_err(|e| {
                LlmError::InvalidResponse(format!("Failed to parse response: {}", e))
            })?;
            return first_choice(body);
        }

        match status {
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                Err(LlmError::Authentication(format!("HTTP {}", status)))
            }
            reqwest::StatusCode::NOT_FOUND => Err(LlmError::ModelNotAvailable(self.model.clone())),
            reqwest::StatusCode::TOO_MANY_REQUESTS => Err(LlmError::RateLimitExceeded),
            _ => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(LlmError::Communication(format!("HTTP {}: {}", status, error_text)))
            }
        }
    }
}

impl TextGenerator for GroqProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        debug!("Blocking generation call, prompt length {} chars", prompt.len());

        // Blocking wrapper for the async client
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to start runtime: {}", e)))?
            .block_on(self.complete(prompt))
    }
}

fn build_client(timeout: Duration) -> Result<reqwest::Client, LlmError> {
    // Each blocking call runs on its own runtime, so idle connections must not be pooled
    reqwest::Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(0)
        .build()
        .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))
}

fn first_choice(body: ChatCompletionResponse) -> Result<String, LlmError> {
    body.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .ok_or_else(|| LlmError::InvalidResponse("Response contained no choices".to_string()))
}
