//! Configuration system — schema, loading, env var overrides, credentials.
//!
//! # Usage
//! ```no_run
//! use polychat_core::config;
//!
//! let cfg = config::load_config(None);
//! println!("Provider: {:?}", cfg.provider);
//! ```

pub mod credentials;
pub mod loader;
pub mod schema;

// Re-export key types
pub use credentials::CredentialStore;
pub use loader::{get_config_path, load_config};
pub use schema::{Config, ProviderConfig, ProvidersConfig, DEFAULT_SYSTEM_PROMPT};
