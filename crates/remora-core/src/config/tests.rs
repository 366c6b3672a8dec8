use super::*;

#[test]
fn test_bot_config_defaults() {
    let bot = BotConfig::default();
    assert_eq!(bot.trigger, "REMIND");
    assert_eq!(bot.enable_phrase, "REMINDENABLE");
    assert_eq!(bot.disable_phrase, "REMINDDISABLE");
    assert_eq!(bot.timezone_offset, "+08:00");
    assert_eq!(bot.open_setting_key, "open");
    assert!(bot.owner_id.is_empty());
}

#[test]
fn test_bot_config_from_toml_partial() {
    let toml_str = r#"
        trigger = "HINOTIFY"
        owner_id = "U1234"
    "#;
    let bot: BotConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(bot.trigger, "HINOTIFY");
    assert_eq!(bot.owner_id, "U1234");
    // Unspecified fields keep defaults.
    assert_eq!(bot.enable_phrase, "REMINDENABLE");
    assert_eq!(bot.timezone_offset, "+08:00");
}

#[test]
fn test_enable_disable_phrase_case_insensitive() {
    let bot = BotConfig::default();
    assert!(bot.is_enable_phrase("REMINDENABLE"));
    assert!(bot.is_enable_phrase("remindenable"));
    assert!(bot.is_enable_phrase("  RemindEnable  "));
    assert!(!bot.is_enable_phrase("REMINDENABLE now"));
    assert!(bot.is_disable_phrase("reminddisable"));
    assert!(!bot.is_disable_phrase("REMINDENABLE"));
}

#[test]
fn test_parse_offset_valid() {
    assert_eq!(
        parse_offset("+08:00"),
        chrono::FixedOffset::east_opt(8 * 3600)
    );
    assert_eq!(
        parse_offset("-05:30"),
        chrono::FixedOffset::east_opt(-(5 * 3600 + 30 * 60))
    );
    assert_eq!(parse_offset("+00:00"), chrono::FixedOffset::east_opt(0));
}

#[test]
fn test_parse_offset_invalid() {
    assert!(parse_offset("08:00").is_none());
    assert!(parse_offset("+8").is_none());
    assert!(parse_offset("+25:00").is_none());
    assert!(parse_offset("+08:75").is_none());
    assert!(parse_offset("").is_none());
}

#[test]
fn test_offset_error_message() {
    let bot = BotConfig {
        timezone_offset: "not-an-offset".to_string(),
        ..Default::default()
    };
    let err = bot.offset().unwrap_err();
    assert!(err.to_string().contains("timezone_offset"));
}

#[test]
fn test_full_config_from_toml() {
    let toml_str = r#"
        [remora]
        log_level = "debug"

        [store]
        db_path = "/tmp/test.db"

        [bot]
        trigger = "REMIND"
        owner_id = "Uowner"
        timezone_offset = "+09:00"

        [channel.line]
        enabled = true
        channel_access_token = "token"
        channel_secret = "secret"

        [server]
        port = 9999
    "#;
    let cfg: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(cfg.remora.log_level, "debug");
    assert_eq!(cfg.store.db_path, "/tmp/test.db");
    assert_eq!(cfg.bot.owner_id, "Uowner");
    assert_eq!(
        cfg.bot.offset().unwrap(),
        chrono::FixedOffset::east_opt(9 * 3600).unwrap()
    );
    let line = cfg.channel.line.unwrap();
    assert!(line.enabled);
    assert_eq!(line.channel_secret, "secret");
    assert_eq!(cfg.server.port, 9999);
    assert_eq!(cfg.server.host, "0.0.0.0");
}
