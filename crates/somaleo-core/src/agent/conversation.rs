//! A single conversation agent.
//!
//! An `Agent` owns one transcript: the system prompt followed by
//! alternating user/assistant turns. Every `ask` replays the whole
//! transcript to the chat-completion client.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{Instrument, debug, info_span};

use somaleo_types::llm::{LlmError, Message};

use crate::llm::client::ChatClient;

/// One transcript plus the client that answers it.
///
/// The transcript lock is held for the whole upstream round trip, so
/// concurrent `ask` calls on the same agent run one at a time.
pub struct Agent<C: ChatClient> {
    client: Arc<C>,
    transcript: Mutex<Vec<Message>>,
}

impl<C: ChatClient> Agent<C> {
    /// Create an agent whose transcript is seeded with `system_prompt`.
    pub fn new(client: Arc<C>, system_prompt: impl Into<String>) -> Self {
        Self {
            client,
            transcript: Mutex::new(vec![Message::system(system_prompt)]),
        }
    }

    /// Append a user turn, send the transcript, and append the reply.
    ///
    /// On failure the user turn stays in the transcript and no assistant
    /// turn is added.
    pub async fn ask(&self, user_input: &str) -> Result<String, LlmError> {
        let mut transcript = self.transcript.lock().await;
        transcript.push(Message::user(user_input));

        let span = info_span!(
            "gen_ai.complete",
            gen_ai.system = self.client.name(),
            gen_ai.request.model = self.client.model(),
            gen_ai.request.temperature = self.client.temperature(),
            gen_ai.request.messages = transcript.len() as u64,
        );

        let reply = self
            .client
            .complete(transcript.as_slice())
            .instrument(span)
            .await?;

        transcript.push(Message::assistant(reply.clone()));
        debug!(turns = transcript.len() as u64, "Transcript extended");

        Ok(reply)
    }

    /// Snapshot of the transcript.
    pub async fn transcript(&self) -> Vec<Message> {
        self.transcript.lock().await.clone()
    }
}
