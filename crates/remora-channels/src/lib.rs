//! # remora-channels
//!
//! Messaging platform integration. Currently LINE only.

pub mod line;
