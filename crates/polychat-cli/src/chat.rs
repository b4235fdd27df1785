//! Turn handling — what one line of REPL input does to the transcript.

use polychat_core::session::Transcript;
use polychat_core::types::ChatResult;
use polychat_providers::{ChatProvider, GatewayError};
use tracing::debug;

/// Reserved command that ends the session.
pub const EXIT_COMMAND: &str = "/exit";
/// Reserved command that truncates the transcript to its seed.
pub const CLEAR_COMMAND: &str = "/clear";

/// What a line of input means.
#[derive(Debug, PartialEq, Eq)]
pub enum Input<'a> {
    Exit,
    Clear,
    /// Anything else, sent verbatim as a user turn (empty lines included).
    Message(&'a str),
}

/// Reserved commands match exactly; surrounding whitespace makes a message.
pub fn parse_input(line: &str) -> Input<'_> {
    match line {
        EXIT_COMMAND => Input::Exit,
        CLEAR_COMMAND => Input::Clear,
        _ => Input::Message(line),
    }
}

/// Append `input` as a user turn, exchange, and append the reply.
///
/// On failure no assistant turn is appended; the user turn stays.
pub async fn send_turn(
    provider: &dyn ChatProvider,
    transcript: &mut Transcript,
    input: &str,
) -> Result<ChatResult, GatewayError> {
    transcript.append_user(input);
    debug!(
        provider = %provider.provider(),
        messages = transcript.messages().len(),
        "sending turn"
    );

    let result = provider.chat(transcript).await?;
    transcript.append_assistant(result.text.clone());
    Ok(result)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use polychat_core::types::{ProviderId, Role};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Replies with a fixed text, or fails with a fixed status.
    struct ScriptedProvider {
        reply: Result<&'static str, u16>,
        calls: AtomicUsize,
    }

    impl ScriptedProvider {
        fn replying(text: &'static str) -> Self {
            Self {
                reply: Ok(text),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ChatProvider for ScriptedProvider {
        async fn chat(&self, _transcript: &Transcript) -> Result<ChatResult, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.reply {
                Ok(text) => Ok(ChatResult::from_reply(
                    ProviderId::Groq,
                    "test",
                    Some(text.into()),
                )),
                Err(status) => Err(GatewayError::UpstreamHttp {
                    provider: ProviderId::Groq,
                    status,
                    body: "nope".into(),
                }),
            }
        }

        fn provider(&self) -> ProviderId {
            ProviderId::Groq
        }

        fn model(&self) -> &str {
            "test"
        }
    }

    #[test]
    fn parse_reserved_commands() {
        assert_eq!(parse_input("/exit"), Input::Exit);
        assert_eq!(parse_input("/clear"), Input::Clear);
        assert_eq!(parse_input("  /clear "), Input::Message("  /clear "));
        assert_eq!(parse_input(" /exit"), Input::Message(" /exit"));
        assert_eq!(parse_input("/exit\t"), Input::Message("/exit\t"));
        assert_eq!(parse_input("/EXIT"), Input::Message("/EXIT"));
        assert_eq!(parse_input("hello"), Input::Message("hello"));
        assert_eq!(parse_input(""), Input::Message(""));
    }

    #[tokio::test]
    async fn successful_turn_appends_user_then_assistant() {
        let provider = ScriptedProvider::replying("Hi there");
        let mut transcript = Transcript::create("You are a helpful assistant.");

        let result = send_turn(&provider, &mut transcript, "hello").await.unwrap();

        assert_eq!(result.text, "Hi there");
        let msgs = transcript.messages();
        assert_eq!(msgs.len(), 3);
        assert_eq!(msgs[1].role, Role::User);
        assert_eq!(msgs[1].content, "hello");
        assert_eq!(msgs[2].role, Role::Assistant);
        assert_eq!(msgs[2].content, "Hi there");
    }

    #[tokio::test]
    async fn failed_turn_appends_no_assistant() {
        let provider = ScriptedProvider::failing(500);
        let mut transcript = Transcript::create("You are a helpful assistant.");

        let err = send_turn(&provider, &mut transcript, "hello").await.unwrap_err();

        assert!(matches!(err, GatewayError::UpstreamHttp { status: 500, .. }));
        assert!(transcript.messages().iter().all(|m| m.role != Role::Assistant));
        assert_eq!(transcript.messages().last().unwrap().role, Role::User);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn clear_between_turns() {
        let provider = ScriptedProvider::replying("ok");
        let mut transcript = Transcript::create("seed");

        for _ in 0..3 {
            send_turn(&provider, &mut transcript, "q").await.unwrap();
        }
        assert_eq!(transcript.messages().len(), 7);

        transcript.clear();
        assert_eq!(transcript.messages().len(), 1);
        send_turn(&provider, &mut transcript, "again").await.unwrap();
        assert_eq!(transcript.messages().len(), 3);
    }
}
