//! Reminder persistence: insert, delivery marking, rehydration listing.

use super::Store;
use chrono::{DateTime, FixedOffset};
use remora_core::error::RemoraError;
use uuid::Uuid;

/// A persisted reminder row.
#[derive(Debug, Clone)]
pub struct Reminder {
    /// Opaque job identifier, stable across restarts.
    pub id: String,
    pub conversation: String,
    /// RFC 3339 fire instant with explicit offset, as stored.
    pub fire_at: String,
    pub message: String,
    pub broadcast: bool,
}

impl Store {
    /// Persist a new pending reminder and return its job ID.
    ///
    /// On failure the caller must not register a timer.
    pub async fn insert_reminder(
        &self,
        conversation: &str,
        fire_at: &DateTime<FixedOffset>,
        message: &str,
        broadcast: bool,
    ) -> Result<String, RemoraError> {
        let id = Uuid::new_v4().to_string();
        sqlx::query(
            "INSERT INTO reminders (id, conversation, fire_at, message, broadcast) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(conversation)
        .bind(fire_at.to_rfc3339())
        .bind(message)
        .bind(broadcast as i64)
        .execute(&self.pool)
        .await
        .map_err(|e| RemoraError::Store(format!("insert reminder failed: {e}")))?;

        Ok(id)
    }

    /// Mark a reminder as delivered.
    ///
    /// Idempotent: a second call for the same ID, or a call with an
    /// unknown ID, is a no-op. A delivered reminder never reverts to
    /// pending.
    pub async fn mark_delivered(&self, id: &str) -> Result<(), RemoraError> {
        sqlx::query(
            "UPDATE reminders SET status = 'delivered', delivered_at = datetime('now') \
             WHERE id = ? AND status = 'pending'",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| RemoraError::Store(format!("mark delivered failed: {e}")))?;

        Ok(())
    }

    /// All pending reminders, past or future, in no particular order.
    ///
    /// Used only at startup rehydration.
    pub async fn list_pending(&self) -> Result<Vec<Reminder>, RemoraError> {
        let rows: Vec<(String, String, String, String, i64)> = sqlx::query_as(
            "SELECT id, conversation, fire_at, message, broadcast \
             FROM reminders WHERE status = 'pending'",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RemoraError::Store(format!("list pending failed: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(id, conversation, fire_at, message, broadcast)| Reminder {
                id,
                conversation,
                fire_at,
                message,
                broadcast: broadcast != 0,
            })
            .collect())
    }
}
