//! Polychat core — shared types, the transcript session, and configuration.
//!
//! # Architecture
//!
//! - [`types`] — `Message`, `Role`, `ProviderId`, `ChatResult`
//! - [`session::Transcript`] — in-memory conversation with a fixed seed
//! - [`config`] — config file + `.env` + env var loading, credential lookup

pub mod config;
pub mod session;
pub mod types;
pub mod utils;

pub use config::{Config, CredentialStore};
pub use session::Transcript;
pub use types::{ChatResult, Message, ProviderId, Role, UnsupportedProvider, FALLBACK_TEXT};
