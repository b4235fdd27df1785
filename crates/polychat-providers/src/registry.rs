//! Provider registry — fixed specs for the three supported backends.
//!
//! Each `ProviderSpec` records everything that differs between vendors apart
//! from body shaping: endpoint, model, how the key is attached, and which
//! wire format the body uses.

use polychat_core::types::ProviderId;

// ─────────────────────────────────────────────
// ProviderSpec — static metadata for one provider
// ─────────────────────────────────────────────

/// How the API key travels with the request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStyle {
    /// `?key=<api key>` appended to the URL (Gemini).
    QueryParam,
    /// `Authorization: Bearer <api key>` header.
    Bearer,
}

/// Request envelope and response path family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WireFormat {
    /// `generateContent` with `contents[].parts[]`.
    Gemini,
    /// `/chat/completions` with `messages[]`.
    OpenAiCompatible,
}

/// Static specification describing one provider.
#[derive(Clone, Debug)]
pub struct ProviderSpec {
    pub id: ProviderId,
    /// Human-readable name for logs. E.g. `"Gemini"`.
    pub display_name: &'static str,
    /// Model that serves every request. Not user-selectable.
    pub model: &'static str,
    /// API base URL used when config does not override it.
    pub default_api_base: &'static str,
    pub auth: AuthStyle,
    pub wire: WireFormat,
}

impl ProviderSpec {
    /// Full request URL for this provider, honoring an optional base override.
    ///
    /// The Gemini key is not part of this string; it is attached as a query
    /// parameter at send time so it never shows up in logs.
    pub fn endpoint(&self, api_base: Option<&str>) -> String {
        let base = api_base.unwrap_or(self.default_api_base).trim_end_matches('/');
        match self.wire {
            WireFormat::Gemini => format!("{}/models/{}:generateContent", base, self.model),
            WireFormat::OpenAiCompatible => format!("{}/chat/completions", base),
        }
    }
}

/// Every supported provider, in the same order as [`ProviderId::ALL`].
pub static PROVIDERS: &[ProviderSpec] = &[
    ProviderSpec {
        id: ProviderId::OpenAi,
        display_name: "OpenAI",
        model: "gpt-5-nano",
        default_api_base: "https://api.openai.com/v1",
        auth: AuthStyle::Bearer,
        wire: WireFormat::OpenAiCompatible,
    },
    ProviderSpec {
        id: ProviderId::Gemini,
        display_name: "Gemini",
        model: "gemini-2.0-flash-lite",
        default_api_base: "https://generativelanguage.googleapis.com/v1beta",
        auth: AuthStyle::QueryParam,
        wire: WireFormat::Gemini,
    },
    ProviderSpec {
        id: ProviderId::Groq,
        display_name: "Groq",
        model: "llama-3.1-8b-instant",
        default_api_base: "https://api.groq.com/openai/v1",
        auth: AuthStyle::Bearer,
        wire: WireFormat::OpenAiCompatible,
    },
];

/// Look up the spec for a provider.
pub fn spec_for(id: ProviderId) -> &'static ProviderSpec {
    match id {
        ProviderId::OpenAi => &PROVIDERS[0],
        ProviderId::Gemini => &PROVIDERS[1],
        ProviderId::Groq => &PROVIDERS[2],
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
