//! OpenAI-compatible `/chat/completions` wire format (OpenAI and Groq).
//!
//! Roles pass through unchanged. The response is read leniently: a missing
//! `choices`, an empty array, or a null `content` all yield `None`.

use serde::{Deserialize, Serialize};
use tracing::warn;

use polychat_core::types::Message;

/// Sampling temperature sent with every request.
pub const TEMPERATURE: f64 = 0.0;

// ─────────────────────────────────────────────
// Request
// ─────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    pub temperature: f64,
}

impl<'a> ChatCompletionRequest<'a> {
    pub fn new(model: &'a str, messages: &'a [Message]) -> Self {
        Self {
            model,
            messages,
            temperature: TEMPERATURE,
        }
    }
}

// ─────────────────────────────────────────────
// Response
// ─────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// `choices[0].message.content`
    pub fn into_text(self) -> Option<String> {
        self.choices?.into_iter().next()?.message?.content
    }
}

/// Extract the reply text from a raw success body.
pub fn extract_text(body: &str) -> Option<String> {
    match serde_json::from_str::<ChatCompletionResponse>(body) {
        Ok(resp) => resp.into_text(),
        Err(e) => {
            warn!(error = %e, "chat completion response did not match the expected shape");
            None
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_envelope() {
        let messages = vec![
            Message::system("You are a helpful assistant."),
            Message::user("hello"),
            Message::assistant("Hi"),
        ];
        let body =
            serde_json::to_value(ChatCompletionRequest::new("gpt-5-nano", &messages)).unwrap();

        assert_eq!(
            body,
            json!({
                "model": "gpt-5-nano",
                "messages": [
                    {"role": "system", "content": "You are a helpful assistant."},
                    {"role": "user", "content": "hello"},
                    {"role": "assistant", "content": "Hi"}
                ],
                "temperature": 0.0
            })
        );
        // the canonical spelling only
        assert!(body.get("temprature").is_none());
        assert!(body.get("message").is_none());
    }

    #[test]
    fn test_extract_happy_path() {
        let body = json!({
            "id": "chatcmpl-1",
            "choices": [{"message": {"role": "assistant", "content": "Hello!"}, "finish_reason": "stop"}],
            "usage": {"total_tokens": 15}
        })
        .to_string();
        assert_eq!(extract_text(&body).as_deref(), Some("Hello!"));
    }

    #[test]
    fn test_extract_missing_links() {
        for body in [
            r#"{}"#,
            r#"{"choices":[]}"#,
            r#"{"choices":null}"#,
            r#"{"choices":[{}]}"#,
            r#"{"choices":[{"message":{}}]}"#,
            r#"{"choices":[{"message":{"content":null}}]}"#,
        ] {
            assert_eq!(extract_text(body), None, "body: {body}");
        }
    }

    #[test]
    fn test_extract_invalid_json() {
        assert_eq!(extract_text(""), None);
        assert_eq!(extract_text("not json"), None);
    }
}
