//! Gemini `generateContent` wire format.
//!
//! Gemini has no system role and calls assistant turns `model`, so roles are
//! remapped on the way out. Every response field is optional on the way in;
//! a missing link anywhere on the text path yields `None`.

use serde::{Deserialize, Serialize};
use tracing::warn;

use polychat_core::types::{Message, Role};

// ─────────────────────────────────────────────
// Request
// ─────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    pub role: &'static str,
    pub parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Part<'a> {
    pub text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    /// One `content` entry per message, in transcript order.
    pub fn from_messages(messages: &'a [Message]) -> Self {
        let contents = messages
            .iter()
            .map(|m| Content {
                role: gemini_role(m.role),
                parts: vec![Part { text: &m.content }],
            })
            .collect();
        Self { contents }
    }
}

/// `assistant → model`; `system` and `user` both become `user`.
pub fn gemini_role(role: Role) -> &'static str {
    match role {
        Role::Assistant => "model",
        Role::System | Role::User => "user",
    }
}

// ─────────────────────────────────────────────
// Response
// ─────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    pub parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// `candidates[0].content.parts[0].text`
    pub fn into_text(self) -> Option<String> {
        self.candidates?
            .into_iter()
            .next()?
            .content?
            .parts?
            .into_iter()
            .next()?
            .text
    }
}

/// Extract the reply text from a raw success body.
pub fn extract_text(body: &str) -> Option<String> {
    match serde_json::from_str::<GenerateContentResponse>(body) {
        Ok(resp) => resp.into_text(),
        Err(e) => {
            warn!(error = %e, "Gemini response did not match the expected shape");
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
    fn test_role_mapping() {
        assert_eq!(gemini_role(Role::Assistant), "model");
        assert_eq!(gemini_role(Role::User), "user");
        assert_eq!(gemini_role(Role::System), "user");
    }

    #[test]
    fn test_request_envelope() {
        let messages = vec![
            Message::system("You are a helpful assistant."),
            Message::user("hello"),
            Message::assistant("Hi there"),
        ];
        let body = serde_json::to_value(GenerateContentRequest::from_messages(&messages)).unwrap();

        assert_eq!(
            body,
            json!({
                "contents": [
                    {"role": "user", "parts": [{"text": "You are a helpful assistant."}]},
                    {"role": "user", "parts": [{"text": "hello"}]},
                    {"role": "model", "parts": [{"text": "Hi there"}]}
                ]
            })
        );
    }

    #[test]
    fn test_extract_happy_path() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"Hi there"}]}}]}"#;
        assert_eq!(extract_text(body).as_deref(), Some("Hi there"));
    }

    #[test]
    fn test_extract_missing_links() {
        for body in [
            r#"{}"#,
            r#"{"candidates":[]}"#,
            r#"{"candidates":null}"#,
            r#"{"candidates":[{}]}"#,
            r#"{"candidates":[{"content":{}}]}"#,
            r#"{"candidates":[{"content":{"parts":[]}}]}"#,
            r#"{"candidates":[{"content":{"parts":[{}]}}]}"#,
        ] {
            assert_eq!(extract_text(body), None, "body: {body}");
        }
    }

    #[test]
    fn test_extract_ignores_extra_fields() {
        let body = json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "ok"}, {"text": "second"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"totalTokenCount": 12}
        })
        .to_string();
        assert_eq!(extract_text(&body).as_deref(), Some("ok"));
    }

    #[test]
    fn test_extract_invalid_json() {
        assert_eq!(extract_text("<html>oops</html>"), None);
        assert_eq!(extract_text(r#"{"candidates":"nope"}"#), None);
    }
}
