//! LINE Messaging API channel.
//!
//! Push and reply message sends, webhook event decoding, and
//! `x-line-signature` verification.
//! Docs: <https://developers.line.biz/en/reference/messaging-api/>

mod events;
mod send;
mod signature;

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use remora_core::config::LineConfig;
use remora_core::{error::RemoraError, event::InboundEvent, traits::Channel};

/// LINE channel using the Messaging API.
pub struct LineChannel {
    config: LineConfig,
    client: reqwest::Client,
    base_url: String,
}

impl LineChannel {
    /// Create a new LINE channel from config.
    pub fn new(config: LineConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            base_url: "https://api.line.me/v2/bot".to_string(),
        }
    }
}

#[async_trait]
impl Channel for LineChannel {
    fn name(&self) -> &str {
        "line"
    }

    async fn push(&self, conversation: &str, text: &str) -> Result<(), RemoraError> {
        self.push_text(conversation, text).await
    }

    async fn reply(&self, reply_token: &str, text: &str) -> Result<(), RemoraError> {
        self.reply_text(reply_token, text).await
    }

    fn verify_signature(&self, body: &[u8], signature: &str) -> bool {
        signature::verify(self.config.channel_secret.as_bytes(), body, signature)
    }

    fn parse_events(&self, body: &[u8]) -> Result<Vec<InboundEvent>, RemoraError> {
        events::parse_events(body)
    }
}
