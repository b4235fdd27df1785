//! Provider gateway for Polychat.
//!
//! # Architecture
//!
//! - [`registry`] — fixed specs (endpoint, model, auth, wire format) for the three backends
//! - [`gemini`] / [`openai_compat`] — request envelopes and lenient response extraction
//! - [`gateway::Gateway`] — dispatch: credential lookup, one POST, normalization
//! - [`traits::ChatProvider`] — what the REPL talks to

pub mod error;
pub mod gateway;
pub mod gemini;
pub mod openai_compat;
pub mod registry;
pub mod traits;

// Re-export main types for convenience
pub use error::GatewayError;
pub use gateway::{BoundGateway, Gateway};
pub use registry::{spec_for, ProviderSpec, PROVIDERS};
pub use traits::ChatProvider;
