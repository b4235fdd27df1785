//! Config loader — reads `~/.polychat/config.json`, a local `.env`, and
//! environment variables.
//!
//! # Loading precedence
//! 1. Defaults (from `Config::default()`)
//! 2. JSON file at `~/.polychat/config.json`
//! 3. `.env` in the working directory (never overrides variables already set)
//! 4. Environment variables (override JSON)

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::schema::Config;
use crate::types::ProviderId;

/// Default config file path.
pub fn get_config_path() -> PathBuf {
    crate::utils::get_data_path().join("config.json")
}

/// Load configuration from the default path, `.env` and env vars.
///
/// Called once by the entry point; the result is passed down explicitly.
/// Falls back to `Config::default()` if the file doesn't exist or can't be parsed.
pub fn load_config(path: Option<&Path>) -> Config {
    let config_path = path
        .map(PathBuf::from)
        .unwrap_or_else(get_config_path);

    load_dotenv();
    apply_env_overrides(read_config_file(&config_path))
}

/// Populate the process environment from `.env`, if present.
fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => warn!("Failed to load .env: {}", e),
    }
}

/// Read a config file without applying any environment overrides.
fn read_config_file(path: &Path) -> Config {
    if !path.exists() {
        info!("No config file found at {}, using defaults", path.display());
        return Config::default();
    }

    debug!("Loading config from {}", path.display());

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read config file {}: {}", path.display(), e);
            return Config::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to parse config JSON: {}", e);
            Config::default()
        }
    }
}

/// Apply process environment overrides on top of a loaded config.
fn apply_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup.
///
/// Supported variables:
/// - `PROVIDER` → `provider`
/// - `OPENAI_API_KEY`, `GOOGLE_API_KEY`, `GROQ_API_KEY` → `providers.<name>.api_key`
/// - `POLYCHAT_PROVIDERS__<NAME>__API_BASE` → `providers.<name>.api_base`
/// - `POLYCHAT_SYSTEM_PROMPT` → `system_prompt`
/// - `POLYCHAT_REQUEST_TIMEOUT_SECS` → `request_timeout_secs`
fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(val) = lookup("PROVIDER") {
        config.provider = Some(val);
    }
    if let Some(val) = lookup("POLYCHAT_SYSTEM_PROMPT") {
        config.system_prompt = val;
    }
    if let Some(val) = lookup("POLYCHAT_REQUEST_TIMEOUT_SECS") {
        match val.parse::<u64>() {
            Ok(secs) => config.request_timeout_secs = Some(secs),
            Err(_) => warn!("Ignoring invalid POLYCHAT_REQUEST_TIMEOUT_SECS={}", val),
        }
    }

    for provider in ProviderId::ALL {
        let entry = config.providers.get_mut(provider);
        if let Some(val) = lookup(provider.env_key()) {
            entry.api_key = val;
        }
        let base_var = format!(
            "POLYCHAT_PROVIDERS__{}__API_BASE",
            provider.as_str().to_ascii_uppercase()
        );
        if let Some(val) = lookup(&base_var) {
            entry.api_base = Some(val);
        }
    }

    config
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
