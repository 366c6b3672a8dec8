//! Delayed-delivery scheduler: one timer task per pending reminder.
//!
//! The timer set is purely in-memory and always reconstructible from the
//! store; delays are computed from the wall clock so restarts and process
//! pauses do not shift fire instants.

use super::dispatch;
use chrono::{DateTime, Utc};
use remora_core::{error::RemoraError, traits::Channel};
use remora_store::{Reminder, Store};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Holds one live timer per pending reminder, keyed by job ID.
#[derive(Clone)]
pub(crate) struct Scheduler {
    store: Store,
    channel: Arc<dyn Channel>,
    timers: Arc<Mutex<HashMap<String, JoinHandle<()>>>>,
}

impl Scheduler {
    pub(crate) fn new(store: Store, channel: Arc<dyn Channel>) -> Self {
        Self {
            store,
            channel,
            timers: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Register a one-shot timer for a reminder.
    ///
    /// A fire instant already in the past fires immediately: overdue
    /// reminders are delivered, never dropped. Scheduling a job ID that
    /// is already tracked replaces the existing timer, which makes
    /// rehydration idempotent. Each timer delivers from its own task, so
    /// a stuck delivery cannot block other timers.
    pub(crate) async fn schedule(&self, reminder: Reminder) {
        let delay = fire_delay(&reminder);
        let job_id = reminder.id.clone();
        let store = self.store.clone();
        let channel = self.channel.clone();
        let timers = self.timers.clone();
        let task_id = job_id.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Fired: leave the map before delivering. The map only ever
            // tracks timers that have not fired.
            timers.lock().await.remove(&task_id);
            dispatch::deliver(&store, channel.as_ref(), &reminder).await;
        });

        if let Some(old) = self.timers.lock().await.insert(job_id.clone(), handle) {
            warn!("replacing existing timer for reminder {job_id}");
            old.abort();
        }
    }

    /// Best-effort cancellation. No-op if the timer already fired or was
    /// never scheduled. Purely in-memory; the stored row is untouched.
    #[allow(dead_code)] // Part of the scheduler contract; no command uses it yet.
    pub(crate) async fn cancel(&self, job_id: &str) {
        if let Some(handle) = self.timers.lock().await.remove(job_id) {
            handle.abort();
            info!("cancelled timer for reminder {job_id}");
        }
    }

    /// Rebuild the timer set from the store.
    ///
    /// Called once at startup, before the ingress accepts commands.
    /// Every pending row is scheduled; rows whose instant elapsed while
    /// the process was down become due-now timers.
    pub(crate) async fn rehydrate(&self) -> Result<usize, RemoraError> {
        let pending = self.store.list_pending().await?;
        let count = pending.len();
        for reminder in pending {
            self.schedule(reminder).await;
        }
        Ok(count)
    }

    /// Abort all live timers. Pending rows stay in the store and are
    /// picked up by the next rehydration.
    pub(crate) async fn shutdown(&self) {
        let mut timers = self.timers.lock().await;
        for (_, handle) in timers.drain() {
            handle.abort();
        }
    }

    #[cfg(test)]
    pub(crate) async fn timer_count(&self) -> usize {
        self.timers.lock().await.len()
    }
}

/// Wall-clock delay until a reminder's fire instant, zero if overdue.
///
/// A stored instant that fails to parse is treated as due now: delivering
/// early beats silently losing the reminder.
fn fire_delay(reminder: &Reminder) -> Duration {
    let fire_at = match DateTime::parse_from_rfc3339(&reminder.fire_at) {
        Ok(dt) => dt,
        Err(e) => {
            warn!(
                "reminder {} has unparsable fire_at '{}': {e}",
                reminder.id, reminder.fire_at
            );
            return Duration::ZERO;
        }
    };
    fire_at
        .signed_duration_since(Utc::now())
        .to_std()
        .unwrap_or(Duration::ZERO)
}
