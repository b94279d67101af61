//! LLM conversation types for Somaleo.
//!
//! These types model the transcript replayed to the chat-completion API
//! on every call, and the errors an upstream call can produce.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of a message in an LLM conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::System => write!(f, "system"),
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system" => Ok(MessageRole::System),
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single message in an LLM conversation.
///
/// Serializes to the `{"role": ..., "content": ...}` shape the
/// chat-completion API expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Errors from LLM provider operations.
///
/// Every way an upstream response can fail to yield a reply is a distinct
/// variant; nothing in the parsing path panics.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The credential environment variable is absent, empty, or not Unicode.
    #[error("{0} not set")]
    MissingCredential(String),

    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The upstream body carried an explicit `error.message`; surfaced verbatim.
    #[error("{0}")]
    Upstream(String),

    /// The upstream body carried an `error` member without a string message.
    #[error("unknown error from upstream")]
    UnknownUpstream,

    #[error("upstream returned non-2xx status {status} without error message")]
    NonSuccessStatus { status: u16 },

    #[error("failed to parse response: {0}")]
    Deserialization(String),

    #[error("malformed response: {0}")]
    MalformedResponse(ResponseShapeError),
}

/// Which part of a successful completion payload did not have the
/// expected shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ResponseShapeError {
    #[error("no choices in response")]
    MissingChoices,

    #[error("no response from AI")]
    EmptyChoices,

    #[error("invalid choice format")]
    InvalidChoice,

    #[error("missing message in response choice")]
    MissingMessage,

    #[error("invalid message format")]
    InvalidMessage,

    #[error("missing content in response message")]
    MissingContent,

    #[error("invalid content type in response message")]
    InvalidContent,
}

impl From<ResponseShapeError> for LlmError {
    fn from(e: ResponseShapeError) -> Self {
        LlmError::MalformedResponse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_role_roundtrip() {
        for role in [MessageRole::System, MessageRole::User, MessageRole::Assistant] {
            let s = role.to_string();
            let parsed: MessageRole = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_message_serializes_to_wire_shape() {
        let msg = Message::user("What is a fraction?");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"role": "user", "content": "What is a fraction?"})
        );
    }

    #[test]
    fn test_upstream_error_display_is_verbatim() {
        let err = LlmError::Upstream("Rate limit exceeded".to_string());
        assert_eq!(err.to_string(), "Rate limit exceeded");
    }

    #[test]
    fn test_missing_credential_display() {
        let err = LlmError::MissingCredential("OPENROUTER_API_KEY".to_string());
        assert_eq!(err.to_string(), "OPENROUTER_API_KEY not set");
    }

    #[test]
    fn test_shape_error_converts() {
        let err: LlmError = ResponseShapeError::EmptyChoices.into();
        assert_eq!(err.to_string(), "malformed response: no response from AI");
    }
}
