//! Per-event command pipeline: classify the message, check authorization,
//! persist, schedule, confirm.

use super::Gateway;
use crate::commands::{self, ReminderCommand};
use remora_core::event::{InboundEvent, JoinEvent, TextMessageEvent};
use remora_store::Reminder;
use tracing::{error, info, warn};

const GROUP_ONLY_REPLY: &str = "⚠️ Reminders only work in group chats.";
const DENIED_REPLY: &str = "⚠️ You are not allowed to schedule reminders here.";
const INTERNAL_ERROR_REPLY: &str = "❌ Something went wrong, please try again.";
const SAVE_FAILED_REPLY: &str = "❌ Could not save the reminder, please try again.";

impl Gateway {
    pub async fn handle_event(&self, event: InboundEvent) {
        match event {
            InboundEvent::Text(msg) => self.handle_text(msg).await,
            InboundEvent::Join(join) => self.handle_join(join).await,
            InboundEvent::Other => {}
        }
    }

    async fn handle_text(&self, msg: TextMessageEvent) {
        let text = msg.text.trim();
        if self.bot.is_enable_phrase(text) {
            self.handle_enable(&msg, true).await;
        } else if self.bot.is_disable_phrase(text) {
            self.handle_enable(&msg, false).await;
        } else if let Some((key, value)) = commands::parse_setting_update(text) {
            self.handle_setting_update(&msg, &key, &value).await;
        } else if text.starts_with(&self.bot.trigger) {
            self.handle_reminder(&msg, text).await;
        }
        // Anything else is ordinary chat, not ours.
    }

    async fn handle_join(&self, join: JoinEvent) {
        info!("joined conversation {}", join.conversation);
        let hint = format!(
            "Hi! Schedule a reminder with:\n{}",
            commands::usage_example(&self.bot.trigger)
        );
        self.reply(&join.reply_token, &hint).await;
    }

    /// Add or remove the conversation from the allow-set. Owner-only;
    /// anyone else is silently ignored so the bot does not advertise
    /// its admin phrases in the group.
    async fn handle_enable(&self, msg: &TextMessageEvent, enable: bool) {
        if !self.may_use_admin(&msg.sender_id) {
            warn!("ignoring enable/disable from non-owner {}", msg.sender_id);
            return;
        }
        let Some(conversation) = msg.conversation.as_deref() else {
            self.reply(&msg.reply_token, GROUP_ONLY_REPLY).await;
            return;
        };
        let result = if enable {
            self.store.allow_conversation(conversation).await
        } else {
            self.store.disallow_conversation(conversation).await
        };
        match result {
            Ok(()) => {
                info!("conversation {conversation} enable={enable}");
                let text = if enable {
                    "✅ Reminders enabled for this group."
                } else {
                    "Reminders disabled for this group."
                };
                self.reply(&msg.reply_token, text).await;
            }
            Err(e) => {
                error!("failed to update allow-set for {conversation}: {e}");
                self.reply(&msg.reply_token, INTERNAL_ERROR_REPLY).await;
            }
        }
    }

    async fn handle_setting_update(&self, msg: &TextMessageEvent, key: &str, value: &str) {
        if !self.may_use_admin(&msg.sender_id) {
            warn!("ignoring setting update from non-owner {}", msg.sender_id);
            return;
        }
        match self.store.set_setting(key, value).await {
            Ok(()) => {
                info!("setting {key} updated");
                self.reply(&msg.reply_token, &format!("✅ Setting updated: {key}"))
                    .await;
            }
            Err(e) => {
                error!("failed to update setting {key}: {e}");
                self.reply(&msg.reply_token, INTERNAL_ERROR_REPLY).await;
            }
        }
    }

    async fn handle_reminder(&self, msg: &TextMessageEvent, text: &str) {
        let Some(conversation) = msg.conversation.as_deref() else {
            self.reply(&msg.reply_token, GROUP_ONLY_REPLY).await;
            return;
        };
        match self.may_use_reminder(conversation, &msg.sender_id).await {
            Ok(true) => {}
            Ok(false) => {
                self.reply(&msg.reply_token, DENIED_REPLY).await;
                return;
            }
            Err(e) => {
                // Fail closed: an unreadable authorization state denies.
                error!("authorization check failed for {conversation}: {e}");
                self.reply(&msg.reply_token, INTERNAL_ERROR_REPLY).await;
                return;
            }
        }

        let offset = match self.bot.offset() {
            Ok(offset) => offset,
            Err(e) => {
                error!("bad timezone offset in config: {e}");
                self.reply(&msg.reply_token, INTERNAL_ERROR_REPLY).await;
                return;
            }
        };

        let cmd = match commands::parse(text, &self.bot.trigger, &offset) {
            Ok(cmd) => cmd,
            Err(e) => {
                info!("rejected reminder from {}: {e}", msg.sender_id);
                let usage = format!(
                    "❌ Invalid reminder format\nExample: {}",
                    commands::usage_example(&self.bot.trigger)
                );
                self.reply(&msg.reply_token, &usage).await;
                return;
            }
        };

        let id = match self
            .store
            .insert_reminder(conversation, &cmd.fire_at, &cmd.message, cmd.broadcast)
            .await
        {
            Ok(id) => id,
            Err(e) => {
                error!("failed to persist reminder: {e}");
                self.reply(&msg.reply_token, SAVE_FAILED_REPLY).await;
                return;
            }
        };

        info!(
            "scheduled reminder {id} in {conversation} for {}",
            cmd.fire_at.to_rfc3339()
        );
        self.scheduler
            .schedule(Reminder {
                id,
                conversation: conversation.to_string(),
                fire_at: cmd.fire_at.to_rfc3339(),
                message: cmd.message.clone(),
                broadcast: cmd.broadcast,
            })
            .await;

        self.reply(&msg.reply_token, &confirmation(&cmd)).await;
    }
}

fn confirmation(cmd: &ReminderCommand) -> String {
    format!(
        "✅ Reminder set\nTime: {} {}\nMessage: {}\n@all: {}",
        cmd.date,
        cmd.time,
        cmd.message,
        if cmd.broadcast { "yes" } else { "no" }
    )
}
