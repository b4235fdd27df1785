//! Chat provider trait — the seam between the REPL and the gateway.
//!
//! The REPL only needs "send this transcript, get a reply". Writing the turn
//! logic against this trait keeps it testable without a network.

use async_trait::async_trait;
use polychat_core::session::Transcript;
use polychat_core::types::{ChatResult, ProviderId};

use crate::error::GatewayError;

/// A backend bound to one provider for the life of a session.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send the full transcript and return the normalized reply.
    ///
    /// Implementations never modify the transcript; appending the reply is
    /// the caller's job.
    async fn chat(&self, transcript: &Transcript) -> Result<ChatResult, GatewayError>;

    /// The provider this instance talks to.
    fn provider(&self) -> ProviderId;

    /// The model identifier that serves requests.
    fn model(&self) -> &str;
}
