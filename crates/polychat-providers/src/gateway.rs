//! Provider gateway — one uniform exchange over three vendor wire protocols.
//!
//! `Gateway::exchange` is the single selection point: it looks up the
//! provider's spec, fetches the credential, shapes the request for the
//! spec's wire format, sends exactly one POST, and normalizes the reply.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error, warn};

use polychat_core::config::{Config, CredentialStore};
use polychat_core::session::Transcript;
use polychat_core::types::{ChatResult, ProviderId};
use polychat_core::utils::truncate_string;

use crate::error::GatewayError;
use crate::registry::{spec_for, AuthStyle, ProviderSpec, WireFormat};
use crate::traits::ChatProvider;
use crate::{gemini, openai_compat};

// ─────────────────────────────────────────────
// Gateway
// ─────────────────────────────────────────────

/// Sends chat exchanges to whichever provider the caller names.
///
/// Holds no conversation state; the transcript is borrowed per call.
#[derive(Clone)]
pub struct Gateway {
    /// HTTP client (shared, connection-pooled).
    client: reqwest::Client,
    credentials: Arc<dyn CredentialStore>,
    /// Per-provider base URL overrides.
    api_bases: HashMap<ProviderId, String>,
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("api_bases", &self.api_bases)
            .finish_non_exhaustive()
    }
}

impl Gateway {
    /// Create a gateway with the fixed endpoints and no request timeout.
    pub fn new(credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            client: reqwest::Client::new(),
            credentials,
            api_bases: HashMap::new(),
        }
    }

    /// Build a gateway from the loaded configuration.
    ///
    /// Credentials are read from `config` lazily at exchange time, and any
    /// `apiBase` overrides replace the fixed endpoints.
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let api_bases = ProviderId::ALL
            .into_iter()
            .filter_map(|id| {
                config
                    .providers
                    .get(id)
                    .api_base
                    .clone()
                    .map(|base| (id, base))
            })
            .collect();

        Ok(Self {
            client,
            credentials: Arc::new(config.clone()),
            api_bases,
        })
    }

    /// Point one provider at a different base URL.
    pub fn with_api_base(mut self, provider: ProviderId, api_base: impl Into<String>) -> Self {
        self.api_bases.insert(provider, api_base.into());
        self
    }

    /// Fix the provider for a session.
    pub fn bind(self, provider: ProviderId) -> BoundGateway {
        BoundGateway {
            gateway: self,
            spec: spec_for(provider),
        }
    }

    /// Exchange with a provider named by string (case-sensitive).
    ///
    /// Unknown names fail before any credential lookup or network call.
    pub async fn exchange_named(
        &self,
        provider: &str,
        transcript: &Transcript,
    ) -> Result<ChatResult, GatewayError> {
        let provider: ProviderId = provider.parse()?;
        self.exchange(provider, transcript).await
    }

    /// Send `transcript` to `provider` and normalize the reply.
    pub async fn exchange(
        &self,
        provider: ProviderId,
        transcript: &Transcript,
    ) -> Result<ChatResult, GatewayError> {
        let spec = spec_for(provider);

        let api_key = self
            .credentials
            .api_key(provider)
            .ok_or(GatewayError::MissingCredential {
                provider,
                env_key: provider.env_key(),
            })?;

        let url = spec.endpoint(self.api_bases.get(&provider).map(String::as_str));

        debug!(
            provider = spec.display_name,
            model = spec.model,
            messages = transcript.messages().len(),
            "Calling LLM"
        );

        let body = self.send(spec, &url, &api_key, transcript).await?;
        let reply = match spec.wire {
            WireFormat::Gemini => gemini::extract_text(&body),
            WireFormat::OpenAiCompatible => openai_compat::extract_text(&body),
        };

        if reply.is_none() {
            warn!(
                provider = spec.display_name,
                body = %truncate_string(&body, 200),
                "Reply text missing, using fallback"
            );
        }

        Ok(ChatResult::from_reply(provider, spec.model, reply))
    }

    /// POST one request and return the body of a 2xx response.
    async fn send(
        &self,
        spec: &ProviderSpec,
        url: &str,
        api_key: &str,
        transcript: &Transcript,
    ) -> Result<String, GatewayError> {
        let provider = spec.id;
        let transport = |e: reqwest::Error| {
            // Gemini keys ride in the query string; keep them out of errors.
            let source = e.without_url();
            error!(provider = spec.display_name, error = %source, "HTTP request failed");
            GatewayError::Transport { provider, source }
        };

        let request = self.client.post(url);
        let request = match spec.auth {
            AuthStyle::QueryParam => request.query(&[("key", api_key)]),
            AuthStyle::Bearer => request.bearer_auth(api_key),
        };
        let messages = transcript.messages();
        let request = match spec.wire {
            WireFormat::Gemini => {
                request.json(&gemini::GenerateContentRequest::from_messages(messages))
            }
            WireFormat::OpenAiCompatible => {
                request.json(&openai_compat::ChatCompletionRequest::new(spec.model, messages))
            }
        };

        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        // Read the body fully even on error, for diagnostics.
        let body = response.text().await.map_err(transport)?;

        if !status.is_success() {
            error!(
                provider = spec.display_name,
                status = %status,
                body = %body,
                "API error"
            );
            return Err(GatewayError::UpstreamHttp {
                provider,
                status: status.as_u16(),
                body,
            });
        }

        debug!(provider = spec.display_name, bytes = body.len(), "LLM response received");
        Ok(body)
    }
}

// ─────────────────────────────────────────────
// BoundGateway
// ─────────────────────────────────────────────

/// A [`Gateway`] fixed to one provider, usable as a [`ChatProvider`].
#[derive(Clone, Debug)]
pub struct BoundGateway {
    gateway: Gateway,
    spec: &'static ProviderSpec,
}

#[async_trait]
impl ChatProvider for BoundGateway {
    async fn chat(&self, transcript: &Transcript) -> Result<ChatResult, GatewayError> {
        self.gateway.exchange(self.spec.id, transcript).await
    }

    fn provider(&self) -> ProviderId {
        self.spec.id
    }

    fn model(&self) -> &str {
        self.spec.model
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
