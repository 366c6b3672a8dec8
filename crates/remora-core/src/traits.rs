use crate::{error::RemoraError, event::InboundEvent};
use async_trait::async_trait;

/// Messaging Channel trait, the transport boundary.
///
/// The chat platform integration implements this trait; everything above
/// it (gateway, scheduler, dispatcher) is platform-agnostic. Tests swap
/// in a mock implementation.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Human-readable channel name.
    fn name(&self) -> &str;

    /// Push a text message to a conversation.
    async fn push(&self, conversation: &str, text: &str) -> Result<(), RemoraError>;

    /// Reply to a specific inbound event using its reply token.
    async fn reply(&self, reply_token: &str, text: &str) -> Result<(), RemoraError>;

    /// Verify the transport signature of a raw webhook body.
    fn verify_signature(&self, body: &[u8], signature: &str) -> bool;

    /// Decode a raw webhook body into inbound events.
    fn parse_events(&self, body: &[u8]) -> Result<Vec<InboundEvent>, RemoraError>;
}
