//! Delivery of a fired reminder to its conversation.

use remora_core::traits::Channel;
use remora_store::{Reminder, Store};
use tracing::{error, info};

const BROADCAST_PREFIX: &str = "@all\n";

/// Push a fired reminder and mark it delivered.
///
/// The push happens first and the status flip second, so a crash between
/// the two leaves the row pending and the reminder is re-sent after
/// restart (at-least-once). A failed push leaves the row pending; no
/// in-process retry, the next restart picks it up.
pub(super) async fn deliver(store: &Store, channel: &dyn Channel, reminder: &Reminder) {
    let text = format_delivery(&reminder.message, reminder.broadcast);
    if let Err(e) = channel.push(&reminder.conversation, &text).await {
        error!("failed to deliver reminder {}: {e}", reminder.id);
        return;
    }
    info!(
        "delivered reminder {} to {}",
        reminder.id, reminder.conversation
    );
    if let Err(e) = store.mark_delivered(&reminder.id).await {
        error!(
            "reminder {} sent but not marked delivered: {e}",
            reminder.id
        );
    }
}

pub(super) fn format_delivery(message: &str, broadcast: bool) -> String {
    let prefix = if broadcast { BROADCAST_PREFIX } else { "" };
    format!("{prefix}⏰ Reminder\n{message}")
}
