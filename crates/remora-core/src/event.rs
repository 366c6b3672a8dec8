use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An inbound event from the chat platform, already decoded from the
/// transport's wire format.
///
/// The gateway dispatches on this by pattern match; only text messages
/// reach command handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum InboundEvent {
    Text(TextMessageEvent),
    Join(JoinEvent),
    /// Any event type the bot does not act on (stickers, leaves, unsends...).
    Other,
}

/// A text message posted in a chat the bot is a member of.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextMessageEvent {
    /// Group conversation ID. `None` for one-on-one chats.
    pub conversation: Option<String>,
    /// Platform-assigned sender ID.
    pub sender_id: String,
    /// One-shot token for replying to this event.
    pub reply_token: String,
    /// Message text content.
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// The bot was added to a group conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinEvent {
    pub conversation: String,
    pub reply_token: String,
}
