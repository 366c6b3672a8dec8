//! # remora-core
//!
//! Core types, traits, configuration, and error handling for the Remora
//! reminder bot.

pub mod config;
pub mod error;
pub mod event;
pub mod traits;

pub use config::shellexpand;
