//! # remora-store
//!
//! Durable state for the Remora bot: pending reminders, the conversation
//! allow-set, and key/value settings. This is the single source of truth:
//! the scheduler's in-memory timers are always reconstructible from here.

mod store;

pub use store::{Reminder, Store};
