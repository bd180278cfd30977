//! Abbrex LLM Provider Layer
//!
//! Text-generation provider implementations for the generative extraction
//! strategy.
//!
//! # Architecture
//!
//! This crate provides implementations of the `TextGenerator` trait from
//! `abbrex-domain`. Every provider receives its configuration (API key,
//! model, endpoint) explicitly through its constructor.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `GroqProvider`: OpenAI-compatible chat-completions API (Groq by default)
//!
//! # Examples
//!
//! ```
//! use abbrex_llm::MockProvider;
//! use abbrex_domain::traits::TextGenerator;
//!
//! let provider = MockProvider::new("CAS: Chinese Academy of Science");
//! let result = provider.generate("list abbreviations").unwrap();
//! assert_eq!(result, "CAS: Chinese Academy of Science");
//! ```

#![warn(missing_docs)]

pub mod groq;

use abbrex_domain::traits::TextGenerator;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use groq::GroqProvider;

/// Failures of a text-generation call
#[derive(Error, Debug)]
pub enum LlmError {
    /// Endpoint unreachable or answered with an unexpected status
    #[error("Communication error: {0}")]
    Communication(String),

    /// API key missing or rejected
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Response body did not contain a completion
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit or quota exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Endpoint does not serve the requested model
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Anything else, including scripted mock failures
    #[error("LLM error: {0}")]
    Other(String),
}

/// Scripted generator for tests
///
/// Replies come from a per-prompt script, falling back to a default reply or
/// failure. No network is involved. Clones share the script and the counter.
///
/// # Examples
///
/// ```
/// use abbrex_llm::MockProvider;
/// use abbrex_domain::traits::TextGenerator;
///
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "AB: alpha beta");
/// assert_eq!(provider.generate("prompt1").unwrap(), "AB: alpha beta");
/// assert_eq!(provider.call_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: Scripted,
    responses: Arc<Mutex<HashMap<String, Scripted>>>,
    call_count: Arc<AtomicUsize>,
}

#[derive(Debug, Clone)]
enum Scripted {
    Reply(String),
    Fail(String),
}

impl MockProvider {
    /// Reply with `response` to every unscripted prompt
    pub fn new(response: impl Into<String>) -> Self {
        Self::with_default(Scripted::Reply(response.into()))
    }

    /// Fail every unscripted prompt with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_default(Scripted::Fail(message.into()))
    }

    fn with_default(default_response: Scripted) -> Self {
        Self {
            default_response,
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Script the reply for one exact prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.script(prompt.into(), Scripted::Reply(response.into()));
    }

    /// Script a failure for one exact prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        self.script(prompt.into(), Scripted::Fail("Mock error".to_string()));
    }

    fn script(&mut self, prompt: String, scripted: Scripted) {
        self.responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(prompt, scripted);
    }

    /// Number of `generate` calls so far, across clones
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Zero the shared call counter
    pub fn reset_call_count(&self) {
        self.call_count.store(0, Ordering::SeqCst);
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("")
    }
}

impl TextGenerator for MockProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        let scripted = self
            .responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(prompt)
            .cloned()
            .unwrap_or_else(|| self.default_response.clone());

        match scripted {
            Scripted::Reply(response) => Ok(response),
            Scripted::Fail(message) => Err(LlmError::Other(message)),
        }
    }
}
