//! Credential lookup.
//!
//! The gateway only ever asks one question: "what is the API key for this
//! provider?". Keys are looked up lazily, for the selected provider only.

use std::collections::HashMap;

use super::schema::Config;
use crate::types::ProviderId;

/// Opaque key-value source of provider API keys.
///
/// Implementations return `None` for a missing or empty key.
pub trait CredentialStore: Send + Sync {
    fn api_key(&self, provider: ProviderId) -> Option<String>;
}

impl CredentialStore for Config {
    fn api_key(&self, provider: ProviderId) -> Option<String> {
        let entry = self.providers.get(provider);
        entry.is_configured().then(|| entry.api_key.clone())
    }
}

impl CredentialStore for HashMap<ProviderId, String> {
    fn api_key(&self, provider: ProviderId) -> Option<String> {
        self.get(&provider).filter(|k| !k.is_empty()).cloned()
    }
}
