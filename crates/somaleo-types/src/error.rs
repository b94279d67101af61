use thiserror::Error;

use crate::llm::LlmError;

/// Errors from repository operations (used by trait definitions in somaleo-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("storage unavailable")]
    Connection,
}

/// Errors from the tutor request flow.
#[derive(Debug, Error)]
pub enum TutorError {
    /// The request is missing something the client must supply.
    #[error("{0}")]
    Validation(String),

    /// No agent could be built at startup (missing credential).
    #[error("AI agent not initialized")]
    AgentUnavailable,

    #[error("AI error: {0}")]
    Upstream(#[from] LlmError),

    #[error("history error: {0}")]
    Repository(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_display() {
        let err = TutorError::from(RepositoryError::Connection);
        assert_eq!(err.to_string(), "history error: storage unavailable");
    }

    #[test]
    fn test_upstream_error_is_prefixed() {
        let err = TutorError::from(LlmError::Upstream("model overloaded".to_string()));
        assert_eq!(err.to_string(), "AI error: model overloaded");
    }

    #[test]
    fn test_agent_unavailable_display() {
        assert_eq!(
            TutorError::AgentUnavailable.to_string(),
            "AI agent not initialized"
        );
    }
}
