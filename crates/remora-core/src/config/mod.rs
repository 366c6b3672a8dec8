mod defaults;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::RemoraError;
use defaults::*;

/// Top-level Remora configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub remora: RemoraConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub channel: ChannelConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoraConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for RemoraConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            log_level: default_log_level(),
        }
    }
}

/// Store config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

/// Bot behavior: command surface and authorization identities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Trigger word a reminder command must start with.
    #[serde(default = "default_trigger")]
    pub trigger: String,
    /// Owner phrase that adds the current conversation to the allow-set.
    #[serde(default = "default_enable_phrase")]
    pub enable_phrase: String,
    /// Owner phrase that removes the current conversation from the allow-set.
    #[serde(default = "default_disable_phrase")]
    pub disable_phrase: String,
    /// Platform user ID of the bot owner. Empty = no admin commands work.
    #[serde(default)]
    pub owner_id: String,
    /// Fixed UTC offset reminders are written and fired in (e.g. "+08:00").
    #[serde(default = "default_timezone_offset")]
    pub timezone_offset: String,
    /// Settings key for the global "open to everyone" flag (value "Y"/"N").
    #[serde(default = "default_open_setting_key")]
    pub open_setting_key: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            trigger: default_trigger(),
            enable_phrase: default_enable_phrase(),
            disable_phrase: default_disable_phrase(),
            owner_id: String::new(),
            timezone_offset: default_timezone_offset(),
            open_setting_key: default_open_setting_key(),
        }
    }
}

impl BotConfig {
    /// Exact, case-insensitive match against the enable phrase.
    pub fn is_enable_phrase(&self, text: &str) -> bool {
        text.trim().eq_ignore_ascii_case(&self.enable_phrase)
    }

    /// Exact, case-insensitive match against the disable phrase.
    pub fn is_disable_phrase(&self, text: &str) -> bool {
        text.trim().eq_ignore_ascii_case(&self.disable_phrase)
    }

    /// Parse `timezone_offset` into a chrono offset.
    pub fn offset(&self) -> Result<chrono::FixedOffset, RemoraError> {
        parse_offset(&self.timezone_offset)
            .ok_or_else(|| RemoraError::Config(format!(
                "invalid timezone_offset '{}', expected ±HH:MM",
                self.timezone_offset
            )))
    }
}

/// Channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChannelConfig {
    pub line: Option<LineConfig>,
}

/// LINE Messaging API config.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LineConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub channel_access_token: String,
    #[serde(default)]
    pub channel_secret: String,
}

/// Webhook ingress server config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

/// Parse a `±HH:MM` offset string.
fn parse_offset(s: &str) -> Option<chrono::FixedOffset> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let (hh, mm) = rest.split_once(':')?;
    let hours: i32 = hh.parse().ok()?;
    let minutes: i32 = mm.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    chrono::FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, RemoraError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| RemoraError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| RemoraError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}
