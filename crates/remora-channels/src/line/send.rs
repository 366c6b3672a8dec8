//! Message sending: push to a conversation, reply to an event.

use super::LineChannel;
use remora_core::error::RemoraError;

impl LineChannel {
    /// Push a text message to a conversation (group or user ID).
    pub(crate) async fn push_text(&self, to: &str, text: &str) -> Result<(), RemoraError> {
        let url = format!("{}/message/push", self.base_url);
        let body = serde_json::json!({
            "to": to,
            "messages": [{ "type": "text", "text": text }],
        });
        self.post_message(&url, &body).await
    }

    /// Reply to an inbound event via its one-shot reply token.
    pub(crate) async fn reply_text(&self, reply_token: &str, text: &str) -> Result<(), RemoraError> {
        let url = format!("{}/message/reply", self.base_url);
        let body = serde_json::json!({
            "replyToken": reply_token,
            "messages": [{ "type": "text", "text": text }],
        });
        self.post_message(&url, &body).await
    }

    async fn post_message(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<(), RemoraError> {
        let resp = self
            .client
            .post(url)
            .bearer_auth(&self.config.channel_access_token)
            .json(body)
            .send()
            .await
            .map_err(|e| RemoraError::Channel(format!("line send failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let error_text = resp.text().await.unwrap_or_default();
            return Err(RemoraError::Channel(format!(
                "line send failed ({status}): {error_text}"
            )));
        }

        Ok(())
    }
}
