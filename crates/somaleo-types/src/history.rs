//! Delivered-history records returned to API clients.
//!
//! An [`ApiMessage`] is what a client sees when it reads back a session.
//! It is distinct from [`crate::llm::Message`], which is the model-context
//! record replayed to the upstream API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;

/// Session id used when a request does not name one.
pub const DEFAULT_SESSION_ID: &str = "default";

/// Layout of timestamp-derived message ids: `20240131235959.123456789`.
const MESSAGE_ID_FORMAT: &str = "%Y%m%d%H%M%S%.9f";

/// Who produced a delivered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Ai => write!(f, "ai"),
        }
    }
}

/// A message as recorded in a session's delivered history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competency: Option<String>,
}

impl ApiMessage {
    /// Build a record stamped with the current instant.
    pub fn now(
        sender: Sender,
        content: impl Into<String>,
        subject: Option<String>,
        competency: Option<String>,
    ) -> Self {
        let timestamp = Utc::now();
        Self {
            id: message_id(&timestamp),
            content: content.into(),
            sender,
            timestamp,
            subject,
            competency,
        }
    }
}

/// Derive a message id from an instant.
pub fn message_id(at: &DateTime<Utc>) -> String {
    at.format(MESSAGE_ID_FORMAT).to_string()
}

/// Inbound tutor question as posted by a client.
///
/// `question` is an alias accepted for older clients; `message` wins when
/// both are present and non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub competency: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

impl TutorRequest {
    /// The learner's text: `message`, falling back to `question`.
    pub fn user_text(&self) -> Option<&str> {
        [self.message.as_deref(), self.question.as_deref()]
            .into_iter()
            .flatten()
            .find(|text| !text.is_empty())
    }

    /// The target session id, `"default"` when absent or empty.
    pub fn session_id(&self) -> &str {
        resolve_session_id(self.session_id.as_deref())
    }
}

/// Resolve an optional client-supplied session id.
pub fn resolve_session_id(session_id: Option<&str>) -> &str {
    match session_id {
        Some(id) if !id.is_empty() => id,
        _ => DEFAULT_SESSION_ID,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sender_serde() {
        assert_eq!(serde_json::to_string(&Sender::Ai).unwrap(), "\"ai\"");
        let parsed: Sender = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(parsed, Sender::User);
    }

    #[test]
    fn test_message_id_layout() {
        let at = Utc
            .with_ymd_and_hms(2024, 3, 9, 14, 5, 7)
            .unwrap()
            .checked_add_signed(chrono::Duration::nanoseconds(42))
            .unwrap();
        assert_eq!(message_id(&at), "20240309140507.000000042");
    }

    #[test]
    fn test_api_message_omits_missing_tags() {
        let msg = ApiMessage::now(Sender::Ai, "Karibu!", None, None);
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["sender"], "ai");
        assert_eq!(json["content"], "Karibu!");
        assert!(json.get("subject").is_none());
        assert!(json.get("competency").is_none());
        assert!(json["timestamp"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn test_api_message_keeps_tags() {
        let msg = ApiMessage::now(
            Sender::User,
            "2 + 2?",
            Some("Mathematics".to_string()),
            Some("Numbers".to_string()),
        );
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["subject"], "Mathematics");
        assert_eq!(json["competency"], "Numbers");
    }

    #[test]
    fn test_request_camel_case_fields() {
        let req: TutorRequest = serde_json::from_str(
            r#"{"message":"hi","subject":"English","sessionId":"abc"}"#,
        )
        .unwrap();
        assert_eq!(req.user_text(), Some("hi"));
        assert_eq!(req.subject.as_deref(), Some("English"));
        assert_eq!(req.session_id(), "abc");
    }

    #[test]
    fn test_request_question_fallback() {
        let req: TutorRequest =
            serde_json::from_str(r#"{"message":"","question":"Why is the sky blue?"}"#).unwrap();
        assert_eq!(req.user_text(), Some("Why is the sky blue?"));
    }

    #[test]
    fn test_request_without_text() {
        let req: TutorRequest = serde_json::from_str(r#"{"subject":"CRE"}"#).unwrap();
        assert_eq!(req.user_text(), None);
    }

    #[test]
    fn test_empty_session_id_defaults() {
        let req: TutorRequest = serde_json::from_str(r#"{"sessionId":""}"#).unwrap();
        assert_eq!(req.session_id(), DEFAULT_SESSION_ID);
        assert_eq!(resolve_session_id(None), DEFAULT_SESSION_ID);
    }
}
