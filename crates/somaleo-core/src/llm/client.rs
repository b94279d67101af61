//! ChatClient trait definition.
//!
//! This is the seam between the conversation logic and the remote
//! chat-completion API. Uses RPITIT like the other ports in this crate.

use somaleo_types::llm::{LlmError, Message};

/// Trait for chat-completion backends.
///
/// Implementations live in somaleo-infra (e.g., `OpenRouterClient`) and own
/// the credential, model choice and sampling settings. Callers only hand
/// over the transcript.
pub trait ChatClient: Send + Sync {
    /// Human-readable provider name (e.g., "openrouter").
    fn name(&self) -> &str;

    /// Model identifier sent with every request.
    fn model(&self) -> &str;

    /// Sampling temperature sent with every request.
    fn temperature(&self) -> f64;

    /// Send the full transcript and return the assistant's reply text.
    fn complete(
        &self,
        messages: &[Message],
    ) -> impl std::future::Future<Output = Result<String, LlmError>> + Send;
}
