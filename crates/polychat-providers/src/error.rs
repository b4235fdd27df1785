//! Gateway error taxonomy.

use polychat_core::types::{ProviderId, UnsupportedProvider};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Provider name outside `openai | gemini | groq`.
    #[error(transparent)]
    UnsupportedProvider(#[from] UnsupportedProvider),

    /// No API key for the selected provider. Raised before any network I/O.
    #[error("{env_key} is missing")]
    MissingCredential {
        provider: ProviderId,
        env_key: &'static str,
    },

    /// Non-2xx response. `body` is the raw response text.
    #[error("{provider} API error {status}: {body}")]
    UpstreamHttp {
        provider: ProviderId,
        status: u16,
        body: String,
    },

    /// The request never produced a response (connect, TLS, timeout, ...).
    #[error("{provider} request failed: {source}")]
    Transport {
        provider: ProviderId,
        #[source]
        source: reqwest::Error,
    },
}

impl GatewayError {
    /// Whether this is a configuration problem rather than a vendor failure.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            GatewayError::UnsupportedProvider(_) | GatewayError::MissingCredential { .. }
        )
    }
}
