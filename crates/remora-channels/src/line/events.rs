//! LINE webhook payload deserialization.

use chrono::{TimeZone, Utc};
use remora_core::error::RemoraError;
use remora_core::event::{InboundEvent, JoinEvent, TextMessageEvent};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct LineWebhookBody {
    #[serde(default)]
    pub events: Vec<LineEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LineEvent {
    /// Event type: "message", "join", "leave", "unsend", ...
    #[serde(rename = "type")]
    pub event_type: String,
    pub reply_token: Option<String>,
    /// Milliseconds since epoch.
    pub timestamp: Option<i64>,
    pub source: Option<LineSource>,
    pub message: Option<LineMessage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LineSource {
    /// Source type: "user", "group", or "room".
    #[serde(rename = "type")]
    pub source_type: String,
    pub user_id: Option<String>,
    pub group_id: Option<String>,
    pub room_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LineMessage {
    #[serde(rename = "type")]
    pub message_type: String,
    pub text: Option<String>,
}

/// Decode a raw webhook body into inbound events.
///
/// Unknown or unsupported event shapes map to `InboundEvent::Other`
/// rather than failing the whole batch.
pub(crate) fn parse_events(body: &[u8]) -> Result<Vec<InboundEvent>, RemoraError> {
    let parsed: LineWebhookBody = serde_json::from_slice(body)
        .map_err(|e| RemoraError::Channel(format!("invalid webhook payload: {e}")))?;

    Ok(parsed.events.into_iter().map(convert_event).collect())
}

fn convert_event(event: LineEvent) -> InboundEvent {
    let conversation = event.source.as_ref().and_then(|s| match s.source_type.as_str() {
        "group" => s.group_id.clone(),
        "room" => s.room_id.clone(),
        _ => None,
    });

    match event.event_type.as_str() {
        "message" => {
            let message = match event.message {
                Some(m) if m.message_type == "text" => m,
                _ => return InboundEvent::Other,
            };
            let text = match message.text {
                Some(t) => t,
                None => return InboundEvent::Other,
            };
            InboundEvent::Text(TextMessageEvent {
                conversation,
                sender_id: event
                    .source
                    .and_then(|s| s.user_id)
                    .unwrap_or_default(),
                reply_token: event.reply_token.unwrap_or_default(),
                text,
                timestamp: event
                    .timestamp
                    .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
                    .unwrap_or_else(Utc::now),
            })
        }
        "join" => match (conversation, event.reply_token) {
            (Some(conversation), Some(reply_token)) => InboundEvent::Join(JoinEvent {
                conversation,
                reply_token,
            }),
            _ => InboundEvent::Other,
        },
        _ => InboundEvent::Other,
    }
}
