//! OpenRouter wire types.
//!
//! The request body is a typed struct. The response is walked as a
//! `serde_json::Value` so that every missing or mistyped field maps to its
//! own [`ResponseShapeError`] instead of one opaque decode failure.

use serde::Serialize;
use serde_json::Value;

use somaleo_types::llm::{LlmError, Message, ResponseShapeError};

/// Request body for `POST {base_url}/chat/completions`.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    pub temperature: f64,
}

/// Interpret a completion response.
///
/// Order matters: an `error` member wins over the HTTP status, and the
/// status is checked before any success field is touched.
pub fn parse_completion(status: u16, body: &[u8]) -> Result<String, LlmError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| LlmError::Deserialization(e.to_string()))?;
    let Value::Object(root) = value else {
        return Err(LlmError::Deserialization(
            "response body is not a JSON object".to_string(),
        ));
    };

    if let Some(error) = root.get("error") {
        return Err(
            match error.get("message").and_then(Value::as_str) {
                Some(message) => LlmError::Upstream(message.to_string()),
                None => LlmError::UnknownUpstream,
            },
        );
    }

    if !(200..300).contains(&status) {
        return Err(LlmError::NonSuccessStatus { status });
    }

    let choices = root.get("choices").ok_or(ResponseShapeError::MissingChoices)?;
    let first = choices
        .as_array()
        .and_then(|choices| choices.first())
        .ok_or(ResponseShapeError::EmptyChoices)?;
    let choice = first.as_object().ok_or(ResponseShapeError::InvalidChoice)?;
    let message = choice.get("message").ok_or(ResponseShapeError::MissingMessage)?;
    let message = message.as_object().ok_or(ResponseShapeError::InvalidMessage)?;
    let content = message.get("content").ok_or(ResponseShapeError::MissingContent)?;
    let reply = content.as_str().ok_or(ResponseShapeError::InvalidContent)?;

    Ok(reply.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(status: u16, body: Value) -> Result<String, LlmError> {
        parse_completion(status, body.to_string().as_bytes())
    }

    fn shape_error(result: Result<String, LlmError>) -> ResponseShapeError {
        match result {
            Err(LlmError::MalformedResponse(shape)) => shape,
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn test_request_serializes_to_wire_shape() {
        let messages = vec![Message::system("seed"), Message::user("hi")];
        let request = ChatCompletionRequest {
            model: "mistralai/mistral-7b-instruct",
            messages: &messages,
            temperature: 0.4,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "mistralai/mistral-7b-instruct",
                "messages": [
                    {"role": "system", "content": "seed"},
                    {"role": "user", "content": "hi"}
                ],
                "temperature": 0.4
            })
        );
    }

    #[test]
    fn test_first_choice_content_is_returned() {
        let body = json!({"choices": [
            {"message": {"role": "assistant", "content": "first"}},
            {"message": {"role": "assistant", "content": "second"}}
        ]});
        assert_eq!(parse(200, body).unwrap(), "first");
    }

    #[test]
    fn test_error_message_is_surfaced_verbatim() {
        let body = json!({"error": {"message": "Rate limit exceeded", "code": 429}});
        match parse(429, body) {
            Err(LlmError::Upstream(msg)) => assert_eq!(msg, "Rate limit exceeded"),
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[test]
    fn test_error_member_wins_over_success_status() {
        let body = json!({
            "error": {"message": "X"},
            "choices": [{"message": {"content": "ignored"}}]
        });
        assert!(matches!(parse(200, body), Err(LlmError::Upstream(m)) if m == "X"));
    }

    #[test]
    fn test_error_without_string_message() {
        assert!(matches!(
            parse(400, json!({"error": {"message": 42}})),
            Err(LlmError::UnknownUpstream)
        ));
        assert!(matches!(
            parse(400, json!({"error": "boom"})),
            Err(LlmError::UnknownUpstream)
        ));
    }

    #[test]
    fn test_non_success_status_without_error() {
        let body = json!({"choices": [{"message": {"content": "never read"}}]});
        assert!(matches!(
            parse(500, body),
            Err(LlmError::NonSuccessStatus { status: 500 })
        ));
    }

    #[test]
    fn test_invalid_json_is_deserialization_error() {
        assert!(matches!(
            parse_completion(200, b"<html>bad gateway</html>"),
            Err(LlmError::Deserialization(_))
        ));
        assert!(matches!(
            parse_completion(200, b"[1, 2]"),
            Err(LlmError::Deserialization(_))
        ));
    }

    #[test]
    fn test_each_shape_failure_is_distinct() {
        assert_eq!(shape_error(parse(200, json!({}))), ResponseShapeError::MissingChoices);
        assert_eq!(
            shape_error(parse(200, json!({"choices": []}))),
            ResponseShapeError::EmptyChoices
        );
        assert_eq!(
            shape_error(parse(200, json!({"choices": "nope"}))),
            ResponseShapeError::EmptyChoices
        );
        assert_eq!(
            shape_error(parse(200, json!({"choices": [7]}))),
            ResponseShapeError::InvalidChoice
        );
        assert_eq!(
            shape_error(parse(200, json!({"choices": [{}]}))),
            ResponseShapeError::MissingMessage
        );
        assert_eq!(
            shape_error(parse(200, json!({"choices": [{"message": "hi"}]}))),
            ResponseShapeError::InvalidMessage
        );
        assert_eq!(
            shape_error(parse(200, json!({"choices": [{"message": {"role": "assistant"}}]}))),
            ResponseShapeError::MissingContent
        );
        assert_eq!(
            shape_error(parse(200, json!({"choices": [{"message": {"content": null}}]}))),
            ResponseShapeError::InvalidContent
        );
    }

    #[test]
    fn test_empty_choices_message() {
        let err = parse(200, json!({"choices": []})).unwrap_err();
        assert_eq!(err.to_string(), "malformed response: no response from AI");
    }
}
