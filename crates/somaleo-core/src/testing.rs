//! In-crate test doubles for the core ports.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use somaleo_types::error::RepositoryError;
use somaleo_types::history::ApiMessage;
use somaleo_types::llm::{LlmError, Message, MessageRole};

use crate::history::store::{HistoryStore, most_recent};
use crate::llm::client::ChatClient;

/// Replays queued results, then echoes the latest user turn.
///
/// Records every transcript it was sent.
pub(crate) struct ScriptedClient {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    seen: Mutex<Vec<Vec<Message>>>,
}

impl ScriptedClient {
    pub(crate) fn echo() -> Self {
        Self::with_replies(Vec::new())
    }

    pub(crate) fn with_replies(replies: Vec<Result<String, LlmError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn seen(&self) -> Vec<Vec<Message>> {
        self.seen.lock().unwrap().clone()
    }
}

impl ChatClient for ScriptedClient {
    fn name(&self) -> &str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    fn temperature(&self) -> f64 {
        0.4
    }

    async fn complete(&self, messages: &[Message]) -> Result<String, LlmError> {
        self.seen.lock().unwrap().push(messages.to_vec());
        let scripted = self.replies.lock().unwrap().pop_front();
        tokio::task::yield_now().await;
        match scripted {
            Some(result) => result,
            None => {
                let last_user = messages
                    .iter()
                    .rev()
                    .find(|m| m.role == MessageRole::User)
                    .map(|m| m.content.as_str())
                    .unwrap_or_default();
                Ok(format!("echo: {last_user}"))
            }
        }
    }
}

/// Mutex-guarded map standing in for the infra store.
#[derive(Default)]
pub(crate) struct MemoryStore {
    sessions: Mutex<HashMap<String, Vec<ApiMessage>>>,
}

impl HistoryStore for MemoryStore {
    async fn append(&self, session_id: &str, message: ApiMessage) -> Result<(), RepositoryError> {
        self.sessions
            .lock()
            .map_err(|_| RepositoryError::Connection)?
            .entry(session_id.to_string())
            .or_default()
            .push(message);
        Ok(())
    }

    async fn list(&self, session_id: &str) -> Result<Vec<ApiMessage>, RepositoryError> {
        let sessions = self.sessions.lock().map_err(|_| RepositoryError::Connection)?;
        Ok(sessions.get(session_id).cloned().unwrap_or_default())
    }

    async fn list_recent(
        &self,
        session_id: &str,
        limit: usize,
    ) -> Result<Vec<ApiMessage>, RepositoryError> {
        Ok(most_recent(self.list(session_id).await?, limit))
    }
}
