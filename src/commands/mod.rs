//! Reminder command parsing: pure validation, no I/O.
//!
//! Grammar: `<trigger> [@all anywhere] YYYY-MM-DD HH:MM <message>`.
//! The broadcast marker is case-insensitive and may sit anywhere in the
//! remainder; everything else is positional.

#[cfg(test)]
mod tests;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use thiserror::Error;

/// Broadcast marker literal.
const BROADCAST_MARKER: &[u8] = b"@all";

/// A validated reminder command.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderCommand {
    /// Date literal exactly as typed (`YYYY-MM-DD`).
    pub date: String,
    /// Time literal exactly as typed (`HH:MM`, 24-hour).
    pub time: String,
    pub message: String,
    pub broadcast: bool,
    /// Fire instant in the configured offset.
    pub fire_at: DateTime<FixedOffset>,
}

/// Why a reminder command failed to parse.
///
/// Always surfaced to the user as a usage reply; never propagated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("text does not start with the trigger word")]
    MissingTrigger,
    #[error("expected date, time, and message")]
    WrongShape,
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    BadDate(String),
    #[error("invalid time '{0}', expected HH:MM")]
    BadTime(String),
    #[error("empty reminder message")]
    EmptyMessage,
}

/// Parse a trigger-prefixed reminder command.
///
/// `offset` is the fixed UTC offset the date/time literals are read in.
pub fn parse(
    text: &str,
    trigger: &str,
    offset: &FixedOffset,
) -> Result<ReminderCommand, ParseError> {
    let rest = text
        .trim()
        .strip_prefix(trigger)
        .ok_or(ParseError::MissingTrigger)?;

    let (rest, broadcast) = strip_broadcast_marker(rest);

    let mut tokens = rest.split_whitespace();
    let date = tokens.next().ok_or(ParseError::WrongShape)?;
    let time = tokens.next().ok_or(ParseError::WrongShape)?;
    // Remaining tokens rejoined with single spaces.
    let message = tokens.collect::<Vec<_>>().join(" ");
    if message.is_empty() {
        return Err(ParseError::EmptyMessage);
    }

    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| ParseError::BadDate(date.to_string()))?;
    let clock = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| ParseError::BadTime(time.to_string()))?;

    // A fixed offset maps every local datetime to exactly one instant.
    let fire_at = match day.and_time(clock).and_local_timezone(*offset) {
        chrono::LocalResult::Single(dt) => dt,
        _ => return Err(ParseError::BadTime(time.to_string())),
    };

    Ok(ReminderCommand {
        date: date.to_string(),
        time: time.to_string(),
        message,
        broadcast,
        fire_at,
    })
}

/// Usage example embedded in parse-error replies.
pub fn usage_example(trigger: &str) -> String {
    format!("{trigger}@all 2026-02-10 14:30 team meeting")
}

/// Parse the owner settings command: `UPDATE <key> <value>`.
///
/// The command word is case-insensitive; the value is the remaining
/// tokens rejoined with single spaces.
pub fn parse_setting_update(text: &str) -> Option<(String, String)> {
    let mut tokens = text.trim().split_whitespace();
    if !tokens.next()?.eq_ignore_ascii_case("UPDATE") {
        return None;
    }
    let key = tokens.next()?.to_string();
    let value = tokens.collect::<Vec<_>>().join(" ");
    if value.is_empty() {
        return None;
    }
    Some((key, value))
}

/// Remove every case-insensitive `@all` occurrence, reporting whether any
/// was found. The marker is tolerated anywhere because users type it as
/// prefix or suffix interchangeably.
fn strip_broadcast_marker(text: &str) -> (String, bool) {
    let mut out = String::with_capacity(text.len());
    let mut found = false;
    let mut rest = text;
    while let Some(pos) = find_marker(rest) {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + BROADCAST_MARKER.len()..];
        found = true;
    }
    out.push_str(rest);
    (out, found)
}

/// Byte offset of the next marker. Safe to slice at: the marker is pure
/// ASCII, so both ends land on char boundaries.
fn find_marker(s: &str) -> Option<usize> {
    s.as_bytes()
        .windows(BROADCAST_MARKER.len())
        .position(|window| window.eq_ignore_ascii_case(BROADCAST_MARKER))
}
