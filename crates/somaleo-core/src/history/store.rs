//! HistoryStore trait definition.
//!
//! Append-only, per-session storage of delivered messages. The in-memory
//! implementation lives in somaleo-infra; a persistent one can replace it
//! without touching handler logic.

use somaleo_types::error::RepositoryError;
use somaleo_types::history::ApiMessage;

/// Repository trait for delivered-history records.
///
/// Sessions are created implicitly by the first append. Records are never
/// removed or reordered.
pub trait HistoryStore: Send + Sync {
    /// Append a message to the end of a session's history.
    fn append(
        &self,
        session_id: &str,
        message: ApiMessage,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// All messages of a session, oldest first. Unknown sessions are empty.
    fn list(
        &self,
        session_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<ApiMessage>, RepositoryError>> + Send;

    /// The most recent `limit` messages of a session, oldest first.
    ///
    /// A `limit` of zero means no limit.
    fn list_recent(
        &self,
        session_id: &str,
        limit: usize,
    ) -> impl std::future::Future<Output = Result<Vec<ApiMessage>, RepositoryError>> + Send;
}

/// Keep only the last `limit` items of `items`; zero keeps everything.
pub fn most_recent<T>(mut items: Vec<T>, limit: usize) -> Vec<T> {
    if limit > 0 && items.len() > limit {
        items.drain(..items.len() - limit);
    }
    items
}
