//! OpenRouter chat-completion client.
//!
//! [`OpenRouterClient`] speaks the OpenAI-compatible `/chat/completions`
//! protocol with OpenRouter's attribution headers.

pub mod client;
pub mod types;

pub use client::OpenRouterClient;
