//! Core types for Polychat — the normalized contract shared by every backend.
//!
//! Vendors disagree on role names, envelopes and where the reply text lives.
//! These types are the one shape the rest of the program sees.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// Messages
// ─────────────────────────────────────────────

/// Who authored a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One turn in a conversation.
///
/// Serializes to the OpenAI `{"role": ..., "content": ...}` shape, which is
/// also what OpenAI-compatible backends expect verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

// ─────────────────────────────────────────────
// Provider identity
// ─────────────────────────────────────────────

/// Raised when a provider name is not one of the supported backends.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported PROVIDER=\"{0}\". Use: openai | gemini | groq")]
pub struct UnsupportedProvider(pub String);

/// The backend a session talks to. Fixed for the life of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    OpenAi,
    Gemini,
    Groq,
}

impl ProviderId {
    /// Every supported backend, in display order.
    pub const ALL: [ProviderId; 3] = [ProviderId::OpenAi, ProviderId::Gemini, ProviderId::Groq];

    /// Wire/config name (`"openai"`, `"gemini"`, `"groq"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::OpenAi => "openai",
            ProviderId::Gemini => "gemini",
            ProviderId::Groq => "groq",
        }
    }

    /// Environment variable holding this provider's API key.
    pub fn env_key(&self) -> &'static str {
        match self {
            ProviderId::OpenAi => "OPENAI_API_KEY",
            ProviderId::Gemini => "GOOGLE_API_KEY",
            ProviderId::Groq => "GROQ_API_KEY",
        }
    }

    /// Parse ignoring ASCII case. Single-shot mode accepts `PROVIDER=Gemini`.
    pub fn parse_case_insensitive(s: &str) -> Result<Self, UnsupportedProvider> {
        s.to_ascii_lowercase()
            .parse()
            .map_err(|_| UnsupportedProvider(s.to_string()))
    }
}

impl FromStr for ProviderId {
    type Err = UnsupportedProvider;

    /// Case-sensitive match against the wire names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProviderId::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnsupportedProvider(s.to_string()))
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────
// Chat result
// ─────────────────────────────────────────────

/// Placeholder reply used when a backend answers successfully but the
/// expected text field is missing.
pub const FALLBACK_TEXT: &str = "Hello output";

/// Normalized outcome of one exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatResult {
    /// Backend that served the request.
    pub provider: ProviderId,
    /// Vendor model identifier.
    pub model: String,
    /// Reply text, trimmed. Never absent.
    pub text: String,
    #[serde(skip)]
    fallback: bool,
}

impl ChatResult {
    /// Build a result from whatever text the adapter could extract.
    ///
    /// `None` takes the [`ChatResult::fallback`] path.
    pub fn from_reply(
        provider: ProviderId,
        model: impl Into<String>,
        reply: Option<String>,
    ) -> Self {
        match reply {
            Some(text) => Self {
                provider,
                model: model.into(),
                text: text.trim().to_string(),
                fallback: false,
            },
            None => Self::fallback(provider, model),
        }
    }

    /// Result carrying [`FALLBACK_TEXT`] instead of a vendor reply.
    pub fn fallback(provider: ProviderId, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            text: FALLBACK_TEXT.to_string(),
            fallback: true,
        }
    }

    /// Whether the text is the placeholder rather than a vendor reply.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
