//! Key/value settings and the conversation allow-set.

use super::Store;
use remora_core::error::RemoraError;

impl Store {
    /// Get a setting value, `None` if unset.
    pub async fn get_setting(&self, key: &str) -> Result<Option<String>, RemoraError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM settings WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RemoraError::Store(format!("get setting failed: {e}")))?;

        Ok(row.map(|(v,)| v))
    }

    /// Upsert a setting, last write wins.
    pub async fn set_setting(&self, key: &str, value: &str) -> Result<(), RemoraError> {
        sqlx::query(
            "INSERT INTO settings (key, value) VALUES (?, ?) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, \
             updated_at = datetime('now')",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| RemoraError::Store(format!("set setting failed: {e}")))?;

        Ok(())
    }

    /// Whether a conversation is in the allow-set.
    pub async fn is_conversation_allowed(&self, conversation: &str) -> Result<bool, RemoraError> {
        let row: Option<(String,)> = sqlx::query_as(
            "SELECT conversation FROM allowed_conversations WHERE conversation = ?",
        )
        .bind(conversation)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RemoraError::Store(format!("allow-set check failed: {e}")))?;

        Ok(row.is_some())
    }

    /// Add a conversation to the allow-set. Idempotent.
    pub async fn allow_conversation(&self, conversation: &str) -> Result<(), RemoraError> {
        sqlx::query("INSERT OR IGNORE INTO allowed_conversations (conversation) VALUES (?)")
            .bind(conversation)
            .execute(&self.pool)
            .await
            .map_err(|e| RemoraError::Store(format!("allow conversation failed: {e}")))?;

        Ok(())
    }

    /// Remove a conversation from the allow-set. No-op if absent.
    pub async fn disallow_conversation(&self, conversation: &str) -> Result<(), RemoraError> {
        sqlx::query("DELETE FROM allowed_conversations WHERE conversation = ?")
            .bind(conversation)
            .execute(&self.pool)
            .await
            .map_err(|e| RemoraError::Store(format!("disallow conversation failed: {e}")))?;

        Ok(())
    }
}
