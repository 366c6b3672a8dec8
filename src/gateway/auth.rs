//! Authorization checks for inbound commands.

use super::Gateway;
use remora_core::error::RemoraError;

impl Gateway {
    /// Admin commands are owner-only. An empty owner ID matches nobody,
    /// so a deployment without an owner has no admin surface.
    pub(super) fn may_use_admin(&self, sender: &str) -> bool {
        !self.bot.owner_id.is_empty() && sender == self.bot.owner_id
    }

    /// Whether a sender may schedule reminders in a conversation.
    ///
    /// The allow-set gates the conversation first, for everyone including
    /// the owner. Inside an allowed conversation the owner may always
    /// schedule; non-owners only when the global open setting is "Y".
    /// An absent setting means closed.
    pub(super) async fn may_use_reminder(
        &self,
        conversation: &str,
        sender: &str,
    ) -> Result<bool, RemoraError> {
        if !self.store.is_conversation_allowed(conversation).await? {
            return Ok(false);
        }
        if self.may_use_admin(sender) {
            return Ok(true);
        }
        let open = self.store.get_setting(&self.bot.open_setting_key).await?;
        Ok(open.as_deref() == Some("Y"))
    }
}
