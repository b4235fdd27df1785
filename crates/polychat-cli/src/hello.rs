//! `polychat hello` — one fixed greeting exchange, JSON on stdout.
//!
//! Any failure propagates to `main`, which prints it to stderr and exits
//! non-zero.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use polychat_core::config::Config;
use polychat_core::session::Transcript;
use polychat_core::types::{Message, ProviderId};
use polychat_providers::{ChatProvider, Gateway, GatewayError};

use crate::helpers;

/// Greeting sent as the only message.
pub const GREETING: &str = "Hey, how can I help you?";

/// The JSON document printed on success.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HelloOutput {
    pub ok: bool,
    pub provider: ProviderId,
    pub model: String,
    pub message: String,
}

/// Send the greeting through `provider`.
pub async fn exchange_greeting(provider: &dyn ChatProvider) -> Result<HelloOutput, GatewayError> {
    let transcript = Transcript::seeded(Message::user(GREETING));
    let result = provider.chat(&transcript).await?;
    Ok(HelloOutput {
        ok: true,
        provider: result.provider,
        model: result.model,
        message: result.text,
    })
}

/// Run the command against the configured provider.
pub async fn run(config: &Config) -> Result<()> {
    // Single-shot mode accepts any casing of PROVIDER.
    let provider = helpers::resolve_provider(config.provider.as_deref(), true)?;
    info!(provider = %provider, "sending greeting");

    let gateway = Gateway::from_config(config).context("failed to build HTTP client")?;
    let output = exchange_greeting(&gateway.bind(provider)).await?;

    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer, provider: &str) -> Config {
        let mut config = Config::default();
        config.provider = Some(provider.to_string());
        for id in ProviderId::ALL {
            let entry = config.providers.get_mut(id);
            entry.api_key = format!("{id}-key");
            entry.api_base = Some(server.uri());
        }
        config
    }

    #[tokio::test]
    async fn greeting_is_only_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_json(serde_json::json!({
                "model": "llama-3.1-8b-instant",
                "messages": [{"role": "user", "content": GREETING}],
                "temperature": 0.0
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"content": " Hello! \n"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = config_for(&server, "groq");
        let gateway = Gateway::from_config(&config).unwrap();
        let output = exchange_greeting(&gateway.bind(ProviderId::Groq)).await.unwrap();

        assert_eq!(
            output,
            HelloOutput {
                ok: true,
                provider: ProviderId::Groq,
                model: "llama-3.1-8b-instant".into(),
                message: "Hello!".into(),
            }
        );
    }

    #[test]
    fn output_json_shape() {
        let output = HelloOutput {
            ok: true,
            provider: ProviderId::Gemini,
            model: "gemini-2.0-flash-lite".into(),
            message: "Hi".into(),
        };
        assert_eq!(
            serde_json::to_value(&output).unwrap(),
            serde_json::json!({
                "ok": true,
                "provider": "gemini",
                "model": "gemini-2.0-flash-lite",
                "message": "Hi"
            })
        );
    }

    #[tokio::test]
    async fn run_accepts_any_case() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-2.0-flash-lite:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{"content": {"parts": [{"text": "hey"}]}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        run(&config_for(&server, "GEMINI")).await.unwrap();
    }

    #[tokio::test]
    async fn run_fails_on_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let err = run(&config_for(&server, "openai")).await.unwrap_err();
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("overloaded"));
    }

    #[tokio::test]
    async fn run_fails_on_unknown_provider() {
        let server = MockServer::start().await;
        let err = run(&config_for(&server, "claude")).await.unwrap_err();
        assert!(err.to_string().contains("claude"));
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
