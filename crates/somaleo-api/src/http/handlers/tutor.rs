//! Tutor message handlers.
//!
//! Endpoints:
//! - POST /api/tutor/messages - Ask a question, returns the tutor's reply
//! - GET  /api/tutor/messages - Read a session's delivered history

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, QueryRejection};
use axum::extract::{Query, State};

use somaleo_types::history::{ApiMessage, TutorRequest};

use crate::http::error::AppError;
use crate::state::AppState;

/// Query parameters for history reads.
///
/// `limit` stays a string so that a non-numeric value is ignored rather
/// than rejected.
#[derive(Debug, Default)]
pub struct HistoryQuery {
    pub session_id: Option<String>,
    pub limit: Option<String>,
}

impl HistoryQuery {
    /// Build from raw query pairs. A repeated key keeps its first value.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |key: &str| {
            pairs
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value.clone())
        };
        Self {
            session_id: first("sessionId"),
            limit: first("limit"),
        }
    }

    /// Positive integer limit, or zero for "everything".
    pub fn limit(&self) -> usize {
        self.limit
            .as_deref()
            .and_then(|limit| limit.parse::<usize>().ok())
            .unwrap_or(0)
    }
}

/// POST /api/tutor/messages - Ask the session's tutor a question.
pub async fn post_message(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ApiMessage>, AppError> {
    let body = body.map_err(|e| {
        tracing::debug!(error = %e, "Failed to read request body");
        AppError::InvalidBody
    })?;
    let request: TutorRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "Failed to decode request body");
        AppError::InvalidBody
    })?;

    let reply = state.tutor.ask(&request).await?;
    Ok(Json(reply))
}

/// GET /api/tutor/messages - Delivered history of a session, oldest first.
pub async fn list_messages(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<ApiMessage>>, AppError> {
    let pairs = query.map(|Query(pairs)| pairs).unwrap_or_default();
    let query = HistoryQuery::from_pairs(&pairs);
    let messages = state
        .tutor
        .history(query.session_id.as_deref(), query.limit())
        .await?;
    Ok(Json(messages))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(limit: Option<&str>) -> HistoryQuery {
        HistoryQuery {
            session_id: None,
            limit: limit.map(str::to_string),
        }
    }

    #[test]
    fn test_limit_parsing() {
        assert_eq!(query(None).limit(), 0);
        assert_eq!(query(Some("3")).limit(), 3);
        assert_eq!(query(Some("0")).limit(), 0);
        assert_eq!(query(Some("-2")).limit(), 0);
        assert_eq!(query(Some("ten")).limit(), 0);
        assert_eq!(query(Some("")).limit(), 0);
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_pairs_first_value_wins() {
        let query = HistoryQuery::from_pairs(&pairs(&[
            ("sessionId", "a"),
            ("limit", "1"),
            ("sessionId", "b"),
            ("limit", "5"),
        ]));
        assert_eq!(query.session_id.as_deref(), Some("a"));
        assert_eq!(query.limit(), 1);
    }

    #[test]
    fn test_from_pairs_ignores_unknown_keys() {
        let query = HistoryQuery::from_pairs(&pairs(&[("session", "x"), ("sessionid", "y")]));
        assert!(query.session_id.is_none());
        assert_eq!(query.limit(), 0);

        let empty = HistoryQuery::from_pairs(&[]);
        assert!(empty.session_id.is_none());
    }
}
