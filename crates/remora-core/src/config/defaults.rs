//! Serde default values for config fields.

pub(super) fn default_name() -> String {
    "remora".to_string()
}

pub(super) fn default_log_level() -> String {
    "info".to_string()
}

pub(super) fn default_db_path() -> String {
    "~/.remora/data/remora.db".to_string()
}

pub(super) fn default_trigger() -> String {
    "REMIND".to_string()
}

pub(super) fn default_enable_phrase() -> String {
    "REMINDENABLE".to_string()
}

pub(super) fn default_disable_phrase() -> String {
    "REMINDDISABLE".to_string()
}

pub(super) fn default_timezone_offset() -> String {
    "+08:00".to_string()
}

pub(super) fn default_open_setting_key() -> String {
    "open".to_string()
}

pub(super) fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

pub(super) fn default_server_port() -> u16 {
    8080
}
