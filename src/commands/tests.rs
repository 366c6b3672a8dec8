use super::*;
use chrono::{FixedOffset, TimeZone};

fn offset() -> FixedOffset {
    FixedOffset::east_opt(8 * 3600).unwrap()
}

#[test]
fn test_parse_plain_reminder() {
    let cmd = parse("REMIND 2026-02-10 14:30 team meeting", "REMIND", &offset()).unwrap();
    assert_eq!(cmd.date, "2026-02-10");
    assert_eq!(cmd.time, "14:30");
    assert_eq!(cmd.message, "team meeting");
    assert!(!cmd.broadcast);
    assert_eq!(
        cmd.fire_at,
        offset().with_ymd_and_hms(2026, 2, 10, 14, 30, 0).unwrap()
    );
}

#[test]
fn test_parse_broadcast_marker_as_suffix_of_trigger() {
    let cmd = parse("REMIND@all 2026-02-10 14:30 team meeting", "REMIND", &offset()).unwrap();
    assert!(cmd.broadcast);
    assert_eq!(cmd.message, "team meeting");
}

#[test]
fn test_parse_broadcast_marker_anywhere_and_any_case() {
    for text in [
        "REMIND@All 2026-02-10 14:30 launch",
        "REMIND 2026-02-10 14:30 launch @ALL",
        "REMIND 2026-02-10 @all 14:30 launch",
    ] {
        let cmd = parse(text, "REMIND", &offset()).unwrap();
        assert!(cmd.broadcast, "{text} should set broadcast");
        assert_eq!(cmd.date, "2026-02-10");
        assert_eq!(cmd.time, "14:30");
        assert_eq!(cmd.message, "launch");
    }
}

#[test]
fn test_parse_round_trips_literal_date_and_time() {
    // The confirmation reply must echo the literals exactly as typed.
    let cmd = parse("REMIND 2030-05-05 10:00 launch", "REMIND", &offset()).unwrap();
    assert_eq!(cmd.date, "2030-05-05");
    assert_eq!(cmd.time, "10:00");
}

#[test]
fn test_parse_message_tokens_rejoined_with_single_spaces() {
    let cmd = parse(
        "REMIND 2026-02-10 14:30   spaced   out   words ",
        "REMIND",
        &offset(),
    )
    .unwrap();
    assert_eq!(cmd.message, "spaced out words");
}

#[test]
fn test_parse_custom_trigger() {
    let cmd = parse("HINOTIFY 2026-02-10 14:30 開會", "HINOTIFY", &offset()).unwrap();
    assert_eq!(cmd.message, "開會");
}

#[test]
fn test_parse_missing_trigger() {
    assert_eq!(
        parse("hello 2026-02-10 14:30 x", "REMIND", &offset()),
        Err(ParseError::MissingTrigger)
    );
}

#[test]
fn test_parse_missing_time() {
    assert_eq!(
        parse("REMIND 2026-02-10", "REMIND", &offset()),
        Err(ParseError::WrongShape)
    );
}

#[test]
fn test_parse_empty_remainder() {
    assert_eq!(
        parse("REMIND", "REMIND", &offset()),
        Err(ParseError::WrongShape)
    );
    assert_eq!(
        parse("REMIND@all", "REMIND", &offset()),
        Err(ParseError::WrongShape)
    );
}

#[test]
fn test_parse_empty_message() {
    assert_eq!(
        parse("REMIND 2026-02-10 14:30", "REMIND", &offset()),
        Err(ParseError::EmptyMessage)
    );
    assert_eq!(
        parse("REMIND 2026-02-10 14:30 @all", "REMIND", &offset()),
        Err(ParseError::EmptyMessage)
    );
}

#[test]
fn test_parse_bad_date() {
    assert_eq!(
        parse("REMIND 2026-13-40 14:30 x", "REMIND", &offset()),
        Err(ParseError::BadDate("2026-13-40".to_string()))
    );
    assert_eq!(
        parse("REMIND tomorrow 14:30 x", "REMIND", &offset()),
        Err(ParseError::BadDate("tomorrow".to_string()))
    );
}

#[test]
fn test_parse_bad_time() {
    assert_eq!(
        parse("REMIND 2026-02-10 25:00 x", "REMIND", &offset()),
        Err(ParseError::BadTime("25:00".to_string()))
    );
    assert_eq!(
        parse("REMIND 2026-02-10 2pm x", "REMIND", &offset()),
        Err(ParseError::BadTime("2pm".to_string()))
    );
}

#[test]
fn test_parse_never_panics_on_garbage() {
    for text in ["", "REMIND\u{0}", "REMIND @all@all@all", "REMIND 💥 💥 💥"] {
        let _ = parse(text, "REMIND", &offset());
    }
}

#[test]
fn test_usage_example_contains_trigger() {
    let example = usage_example("REMIND");
    assert!(example.starts_with("REMIND@all "));
    assert!(example.contains("2026-02-10 14:30"));
}

#[test]
fn test_parse_setting_update() {
    assert_eq!(
        parse_setting_update("UPDATE open Y"),
        Some(("open".to_string(), "Y".to_string()))
    );
    assert_eq!(
        parse_setting_update("update greeting hello there"),
        Some(("greeting".to_string(), "hello there".to_string()))
    );
    assert_eq!(parse_setting_update("UPDATE open"), None);
    assert_eq!(parse_setting_update("UPDATE"), None);
    assert_eq!(parse_setting_update("UPGRADE open Y"), None);
}

#[test]
fn test_strip_broadcast_marker_multiple_occurrences() {
    let (rest, found) = strip_broadcast_marker("@all 2026-01-01 09:00 hi @ALL");
    assert!(found);
    assert!(!rest.to_lowercase().contains("@all"));
}
