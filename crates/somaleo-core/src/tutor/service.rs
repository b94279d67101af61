//! Tutor service orchestrating delivered history around agent calls.
//!
//! TutorService is what the HTTP handlers and the terminal chat call. It
//! records the learner's message, asks the session's agent, records the
//! reply, and serves history reads.

use std::sync::Arc;

use tracing::{info, warn};

use somaleo_types::error::TutorError;
use somaleo_types::history::{ApiMessage, Sender, TutorRequest, resolve_session_id};

use crate::agent::registry::AgentRegistry;
use crate::history::store::HistoryStore;
use crate::llm::client::ChatClient;

/// Generic over `HistoryStore` and `ChatClient` so that somaleo-core never
/// depends on somaleo-infra.
///
/// `agents` is `None` when no client could be built at startup; history
/// reads still work, questions fail with [`TutorError::AgentUnavailable`].
pub struct TutorService<S: HistoryStore, C: ChatClient> {
    history: Arc<S>,
    agents: Option<AgentRegistry<C>>,
}

impl<S: HistoryStore, C: ChatClient> TutorService<S, C> {
    pub fn new(history: Arc<S>, agents: Option<AgentRegistry<C>>) -> Self {
        Self { history, agents }
    }

    /// Whether questions can be answered.
    pub fn is_ready(&self) -> bool {
        self.agents.is_some()
    }

    pub fn agents(&self) -> Option<&AgentRegistry<C>> {
        self.agents.as_ref()
    }

    /// Answer a learner's question within its session.
    ///
    /// The user record is appended before the upstream call and stays even
    /// if the call fails. The assistant record carries the same subject and
    /// competency tags as the question.
    pub async fn ask(&self, request: &TutorRequest) -> Result<ApiMessage, TutorError> {
        let text = request
            .user_text()
            .ok_or_else(|| TutorError::Validation("message required".to_string()))?;
        let agents = self.agents.as_ref().ok_or(TutorError::AgentUnavailable)?;
        let session_id = request.session_id();

        let question = ApiMessage::now(
            Sender::User,
            text,
            request.subject.clone(),
            request.competency.clone(),
        );
        self.history.append(session_id, question).await?;

        let reply = match agents.agent_for(session_id).ask(text).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(session_id, error = %e, "Upstream completion failed");
                return Err(e.into());
            }
        };

        let answer = ApiMessage::now(
            Sender::Ai,
            reply,
            request.subject.clone(),
            request.competency.clone(),
        );
        self.history.append(session_id, answer.clone()).await?;

        info!(session_id, reply_len = answer.content.len() as u64, "Tutor reply delivered");
        Ok(answer)
    }

    /// Delivered history of a session, oldest first.
    ///
    /// `limit` of zero returns everything; otherwise only the most recent
    /// `limit` records.
    pub async fn history(
        &self,
        session_id: Option<&str>,
        limit: usize,
    ) -> Result<Vec<ApiMessage>, TutorError> {
        let session_id = resolve_session_id(session_id);
        let messages = if limit > 0 {
            self.history.list_recent(session_id, limit).await?
        } else {
            self.history.list(session_id).await?
        };
        Ok(messages)
    }
}
