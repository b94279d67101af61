//! In-memory history store.
//!
//! Implements `HistoryStore` from `somaleo-core` on a `DashMap` keyed by
//! session id. Shard locks are held only for the push or the clone, never
//! across an upstream call. Contents are lost on restart.

use dashmap::DashMap;

use somaleo_core::history::store::HistoryStore;
use somaleo_types::error::RepositoryError;
use somaleo_types::history::ApiMessage;

/// DashMap-backed implementation of `HistoryStore`.
#[derive(Debug, Default)]
pub struct InMemoryHistoryStore {
    sessions: DashMap<String, Vec<ApiMessage>>,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions with at least one message.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

impl HistoryStore for InMemoryHistoryStore {
    async fn append(&self, session_id: &str, message: ApiMessage) -> Result<(), RepositoryError> {
        self.sessions
            .entry(session_id.to_string())
            .or_default()
            .push(message);
        Ok(())
    }

    async fn list(&self, session_id: &str) -> Result<Vec<ApiMessage>, RepositoryError> {
        Ok(self
            .sessions
            .get(session_id)
            .map(|messages| messages.value().clone())
            .unwrap_or_default())
    }

    async fn list_recent(
        &self,
        session_id: &str,
        limit: usize,
    ) -> Result<Vec<ApiMessage>, RepositoryError> {
        let Some(messages) = self.sessions.get(session_id) else {
            return Ok(Vec::new());
        };
        let start = if limit > 0 {
            messages.len().saturating_sub(limit)
        } else {
            0
        };
        Ok(messages[start..].to_vec())
    }
}
